mod build_resp;
mod check_pass;
mod record_id;

pub use build_resp::{build_err_resp, build_msg_resp, build_resp};
pub use check_pass::{check_pass, hash_pass};
pub use record_id::{parse_id, RecordId};
