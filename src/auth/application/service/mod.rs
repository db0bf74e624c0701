pub mod iam_token_service;
