/*
[INPUT]:  Gemini REST payloads and caller-supplied request arguments
[OUTPUT]: Wire enums, request structs, response DTOs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange adds fields or endpoints
*/

pub mod enums;
pub mod models;
pub mod requests;
pub mod responses;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use responses::*;
