pub mod iam_token_response;
