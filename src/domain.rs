mod alb_request_event;
mod invocation_event;
mod response_record;

pub use alb_request_event::AlbRequestEvent;
pub use invocation_event::InvocationEvent;
pub use response_record::{ResponseRecord, WEB_BACKEND_BODY};
