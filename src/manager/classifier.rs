//! Classification of manager status codes.

use crate::manager::response::ManagerResponse;

/// Configuration changed; `md5` and `data` carry the new revision.
pub const UPDATE: i32 = 0;
/// Configuration unchanged since the fingerprint sent with the request.
pub const NO_UPDATE: i32 = 1;
/// The manager rejected the request parameters.
pub const REQ_PARAMS_ERROR: i32 = -101;

/// What a reload cycle should do with a manager response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Unchanged,
    Updated(ManagerResponse),
    ParamsError(i32),
    CommonError(i32),
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Unchanged => "unchanged",
            Outcome::Updated(_) => "updated",
            Outcome::ParamsError(_) => "params_error",
            Outcome::CommonError(_) => "common_error",
        }
    }
}

/// Map the response's status code onto an [`Outcome`].
pub fn classify(response: ManagerResponse) -> Outcome {
    match response.err_code {
        NO_UPDATE => Outcome::Unchanged,
        UPDATE => Outcome::Updated(response),
        REQ_PARAMS_ERROR => Outcome::ParamsError(REQ_PARAMS_ERROR),
        code => Outcome::CommonError(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(err_code: i32) -> ManagerResponse {
        ManagerResponse {
            err_code,
            md5: "abc".to_string(),
            data: None,
        }
    }

    #[test]
    fn test_classify_codes() {
        assert_eq!(classify(response(1)), Outcome::Unchanged);
        assert_eq!(classify(response(0)), Outcome::Updated(response(0)));
        assert_eq!(classify(response(-101)), Outcome::ParamsError(-101));
        assert_eq!(classify(response(-1)), Outcome::CommonError(-1));
        assert_eq!(classify(response(500)), Outcome::CommonError(500));
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify(response(1)).label(), "unchanged");
        assert_eq!(classify(response(7)).label(), "common_error");
    }
}
