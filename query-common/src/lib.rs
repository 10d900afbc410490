pub mod codec;
pub mod error;
pub mod models;
pub mod ordering;
pub mod routes;

// 重新导出常用类型和函数，方便直接使用
pub use codec::{decode, encode, encode_bounded, CANONICAL_EMPTY_QUERY, MAX_QUERY_LEN};
pub use error::CodecError;
pub use models::{KeywordKind, KeywordToken, QueryDescriptor, TagFilterEntry, TriMode, YearInterval};
pub use ordering::{Direction, SortOrder};
pub use routes::{Navigation, PAGE_SIZE};
