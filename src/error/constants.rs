use super::const_error;

const_error! {
    #[error("E000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}

const_error! {
    #[error("E001", "missing fields")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_MISSING_FIELDS;
}

const_error! {
    #[error("E002", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}

const_error! {
    #[error("E003", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}

const_error! {
    #[error("E004", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
}

const_error! {
    #[error("E005", "failed to deserialize json")]
    #[status(INTERNAL_SERVER_ERROR)]
    const JSON_DESERIALIZE;
}

const_error! {
    #[error("E006", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}

const_error! {
    #[error("E007", "could not get claims")]
    #[status(UNAUTHORIZED)]
    const COULD_NOT_GET_CLAIMS;
}

const_error! {
    #[error("E008", "invalid query string")]
    #[status(BAD_REQUEST)]
    const INVALID_QUERY;
}

const_error! {
    #[error("E009", "invalid path parameter")]
    #[status(BAD_REQUEST)]
    const INVALID_PATH;
}

const_error! {
    #[error("E020", "document not found")]
    #[status(NOT_FOUND)]
    const DOCUMENT_NOT_FOUND;
}

const_error! {
    #[error("E030", "student not found")]
    #[status(NOT_FOUND)]
    const STUDENT_NOT_FOUND;
}

const_error! {
    #[error("E031", "a student with this ra already exists")]
    #[status(CONFLICT)]
    const STUDENT_RA_EXISTS;
}

const_error! {
    #[error("E040", "solicitation not found")]
    #[status(NOT_FOUND)]
    const SOLICITATION_NOT_FOUND;
}

const_error! {
    #[error("E041", "status transition is not allowed")]
    #[status(BAD_REQUEST)]
    const INVALID_STATUS_TRANSITION;
}

const_error! {
    #[error("E042", "estimated completion date is before today")]
    #[status(BAD_REQUEST)]
    const DATE_IN_THE_PAST;
}

const_error! {
    #[error("E050", "comment not found")]
    #[status(NOT_FOUND)]
    const COMMENT_NOT_FOUND;
}
