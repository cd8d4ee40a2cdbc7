pub mod coerce;
pub mod interface;
pub mod mock;

pub use interface::{
    AudioTranslateFields, AudioTranslateRequest, AudioTranslateResponse, ErrorResponse,
    TextTranslateRequest, TextTranslateResponse,
};
pub use mock::MockTranslator;
