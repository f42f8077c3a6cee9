pub mod question_response;
pub mod quiz_result;
pub mod run_request;

pub use question_response::QuestionBankResponse;
pub use quiz_result::QuizResultResponse;
pub use run_request::RunQuizRequest;
