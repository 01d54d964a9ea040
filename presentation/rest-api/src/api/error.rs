use poem_openapi::{Object, payload::Json};

/// `{"Status": bool, "message": string}` envelope, used for every failure and
/// for successes that only report a message.
#[derive(Object, Debug, Clone)]
pub struct MessageEnvelope {
    #[oai(rename = "Status")]
    pub status: bool,
    pub message: String,
}

impl MessageEnvelope {
    pub fn success(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: true,
            message: message.into(),
        })
    }

    pub fn failure(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: false,
            message: message.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> Json<MessageEnvelope>;
}
