//! OCR to Excel Common Library
//!
//! ブラウザ(WASM)版とテストで共有される型・状態機械・Excel生成

pub mod types;
pub mod error;
pub mod config;
pub mod lines;
pub mod export;
pub mod source;
pub mod recognizer;
pub mod delivery;
pub mod session;
pub mod pipeline;

pub use types::{RecognitionResult, SpreadsheetDocument, TextLine, XLSX_MIME_TYPE};
pub use error::{Error, Result};
pub use config::{Languages, Settings};
pub use lines::{extract_lines, join_lines};
pub use export::build_spreadsheet;
pub use source::{InMemoryFile, SourceFile};
pub use recognizer::{Recognizer, ScriptedRecognizer};
pub use delivery::{Delivery, MemoryDelivery};
pub use session::{Phase, Session, SessionStore};
pub use pipeline::{process, Outcome, RunReport};
