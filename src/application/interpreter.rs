use crate::domain::codes::{AVS_ERRORS, CARD_CODE_ERRORS, avs_message, cvv_message};
use crate::domain::fields::{AUTH_CODE, CARD_NUM, PN_REF, RequestFields};
use crate::domain::operation::AuthorizationReference;
use crate::domain::response::{APPROVED, AvsResult, CvvResult, NormalizedResult, ParsedResponse};

pub const RESULT: &str = "Result";
pub const MESSAGE: &str = "Message";
pub const MESSAGE1: &str = "Message1";
pub const MESSAGE2: &str = "Message2";
pub const AVS_RESULT: &str = "GetAVSResult";
pub const CV_RESULT: &str = "GetCVResult";

pub fn result_code(response: &ParsedResponse) -> Option<i64> {
    response
        .get(RESULT)
        .and_then(|code| code.trim().parse().ok())
}

/// Declines flagged by CVV or AVS get the standard description for that
/// code; everything else reads `Message`, `Message1` and `Message2` joined.
pub fn message_from(response: &ParsedResponse, success: bool) -> String {
    if !success {
        if let Some(code) = response.get(CV_RESULT)
            && CARD_CODE_ERRORS.contains(&code)
            && let Some(message) = cvv_message(code)
        {
            return message.to_string();
        }
        if let Some(code) = response.get(AVS_RESULT)
            && AVS_ERRORS.contains(&code)
            && let Some(message) = avs_message(code)
        {
            return message.to_string();
        }
    }

    [MESSAGE, MESSAGE1, MESSAGE2]
        .iter()
        .filter_map(|name| response.get(name))
        .collect()
}

/// Last four characters, or `None` for anything shorter.
fn last_four(value: &str) -> Option<String> {
    let count = value.chars().count();
    (count >= 4).then(|| value.chars().skip(count - 4).collect())
}

/// Builds the uniform result.
///
/// The authorization's `CardNum` comes from the *request* so that it can be
/// replayed on a later capture.
pub fn interpret(response: ParsedResponse, request: &RequestFields, test: bool) -> NormalizedResult {
    let result_code = result_code(&response);
    let success = result_code == Some(APPROVED);
    let message = message_from(&response, success);

    let authorization = AuthorizationReference {
        auth_code: response.get(AUTH_CODE).map(str::to_string),
        card_num: request.get(CARD_NUM).and_then(last_four),
        pn_ref: response.get(PN_REF).map(str::to_string),
    };

    NormalizedResult {
        success,
        message,
        result_code,
        authorization,
        avs_result: AvsResult::from_code(response.get(AVS_RESULT)),
        cvv_result: CvvResult::from_code(response.get(CV_RESULT)),
        test,
        params: response,
    }
}
