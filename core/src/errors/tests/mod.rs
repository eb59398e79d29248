
use errx_shared::MessageBody;

use super::RequestContext;

/// Context that records every abort instead of writing a response
#[derive(Debug, Default)]
pub(super) struct RecordingContext {
    pub aborts: Vec<(u16, MessageBody)>,
}

impl RequestContext for RecordingContext {
    fn abort_with_json(&mut self, status: u16, body: MessageBody) {
        self.aborts.push((status, body));
    }
}
