pub mod cdn;
pub mod embedded;
pub mod error;
pub mod source;
pub mod template;

pub use cdn::{
    cdn_config_json, custom_import_map, generate_head_html, CdnConfig, ImportMap, RuntimeMode,
};
pub use embedded::build_info_json;
pub use error::{ExtractError, PreviewError};
pub use source::{load_component_source, read_component_source};
pub use template::{extract_template_content, extract_template_value, try_extract_template};
