use serde::Serialize;
use std::fmt;

/// Status classification shared by every variant of the same family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BadRequest,
    Gateway,
    InternalServer,
    Unauthorized,
    Forbidden,
    NotFound,
    ServiceUnavailable,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::BadRequest,
        Category::Gateway,
        Category::InternalServer,
        Category::Unauthorized,
        Category::Forbidden,
        Category::NotFound,
        Category::ServiceUnavailable,
    ];

    /// Transport status code for this category
    pub const fn status_code(self) -> u16 {
        match self {
            Category::BadRequest => 400,
            Category::Unauthorized => 401,
            Category::Forbidden => 403,
            Category::NotFound => 404,
            Category::InternalServer => 500,
            Category::Gateway => 502,
            Category::ServiceUnavailable => 503,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::BadRequest => "bad-request",
            Category::Gateway => "gateway",
            Category::InternalServer => "internal-server",
            Category::Unauthorized => "unauthorized",
            Category::Forbidden => "forbidden",
            Category::NotFound => "not-found",
            Category::ServiceUnavailable => "service-unavailable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let codes: Vec<(&str, u16)> = Category::ALL
            .iter()
            .map(|c| (c.name(), c.status_code()))
            .collect();
        assert_eq!(
            codes,
            vec![
                ("bad-request", 400),
                ("gateway", 502),
                ("internal-server", 500),
                ("unauthorized", 401),
                ("forbidden", 403),
                ("not-found", 404),
                ("service-unavailable", 503),
            ]
        );
    }

    #[test]
    fn test_serialized_name_matches_display() {
        for category in Category::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::json!(category.to_string()));
        }
    }
}
