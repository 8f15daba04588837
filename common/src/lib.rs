//! Rules shared by the service and the client: the wire date format, the
//! solicitation status table and the phone number pattern.

pub mod date;
pub mod status;
pub mod validation;
