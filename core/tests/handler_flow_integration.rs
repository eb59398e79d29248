//! End-to-end flow through the public API: a repository failure is classified
//! where it happens, propagated with `?`, and digested by the handler.

use std::io;
use std::sync::Arc;
use std::thread;

use errx_core::{
    new_err, Classify, Digester, Disposition, ErrorKind, Errx, FallbackPolicy, MemorySink,
    MessageBody, RequestContext,
};

#[derive(Default)]
struct Recorder {
    aborts: Vec<(u16, MessageBody)>,
}

impl RequestContext for Recorder {
    fn abort_with_json(&mut self, status: u16, body: MessageBody) {
        self.aborts.push((status, body));
    }
}

fn load_user(id: u32) -> Result<String, Errx> {
    if id == 0 {
        return Err(new_err(ErrorKind::MalformedInput, None, "User id must be positive", "Users.load"));
    }
    let row: Result<Option<String>, io::Error> = Err(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "connect ECONNREFUSED 127.0.0.1:3306",
    ));
    let row = row.classify(ErrorKind::ConnectionFailure, "Service is unavailable", "Users.load")?;
    row.ok_or_else(|| new_err(ErrorKind::NotFound, None, "User not found", "Users.load"))
}

fn handle(id: u32, digester: &Digester, ctx: &mut Recorder) -> Disposition {
    match load_user(id) {
        Ok(_) => Disposition::Continue,
        Err(err) => digester.digest(Some(&err), ctx),
    }
}

#[test]
fn test_propagated_error_is_digested_once() {
    let sink = Arc::new(MemorySink::new());
    let digester = Digester::new(sink.clone());
    let mut ctx = Recorder::default();

    assert_eq!(handle(7, &digester, &mut ctx), Disposition::Aborted);

    assert_eq!(ctx.aborts.len(), 1);
    assert_eq!(ctx.aborts[0].0, 503);
    assert!(ctx.aborts[0].1.message.starts_with("Service is unavailable\n"));
    assert!(!ctx.aborts[0].1.message.contains("ECONNREFUSED"));
    assert_eq!(sink.len(), 1);
    assert!(sink.lines()[0].contains("ECONNREFUSED"));
}

#[test]
fn test_validation_error_without_cause() {
    let digester = Digester::new(Arc::new(MemorySink::new())).with_fallback(FallbackPolicy::Expose);
    let mut ctx = Recorder::default();

    handle(0, &digester, &mut ctx);

    assert_eq!(ctx.aborts[0].0, 400);
    assert!(ctx.aborts[0].1.message.starts_with("User id must be positive\n"));
}

#[test]
fn test_errors_cross_threads() {
    let err = new_err(ErrorKind::CacheQuery, Some("MOVED 3999 127.0.0.1:6381".into()), "Try again", "Cache.get");
    let id = err.correlation_id().clone();

    let handle = thread::spawn(move || err.correlation_id().clone());
    assert_eq!(handle.join().unwrap(), id);
}
