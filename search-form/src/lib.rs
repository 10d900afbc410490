use wasm_bindgen::prelude::*;
use std::fmt::Display;

// 导出模块
pub mod config;
pub mod dom;
pub mod encoder;
pub mod error;
pub mod keyword;
pub mod pager;
pub mod state;
pub mod toggle;
pub mod year;

pub use config::FormConfig;
pub use encoder::{build_descriptor, encode_form, submit};
pub use error::FormError;
pub use keyword::{parse_keywords, render_keywords};
pub use pager::PagerRequest;
pub use state::FormState;
pub use toggle::{CyclePolicy, FilterItem, FilterState};
pub use year::{translate_year, translate_year_at};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js_error(e: impl Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// 搜索表单JS接口
#[wasm_bindgen]
pub struct SearchFormJS;

#[wasm_bindgen]
impl SearchFormJS {
    /// 读取页面配置并挂载所有事件，`config` 可省略
    #[wasm_bindgen]
    pub fn bind(config: JsValue) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config: FormConfig = if config.is_undefined() || config.is_null() {
            FormConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| to_js_error(format!("解析配置失败: {}", e)))?
        };

        dom::FormBinding::new(config)
            .and_then(|binding| binding.attach())
            .map_err(|e| {
                web_sys::console::error_1(&JsValue::from_str(&format!("绑定搜索表单失败: {}", e)));
                to_js_error(e)
            })
    }

    /// 由表单快照 JSON 计算跳转地址
    #[wasm_bindgen]
    pub fn navigation_for(state_json: &str) -> Result<String, JsValue> {
        let form: FormState = serde_json::from_str(state_json).map_err(|e| to_js_error(FormError::from(e)))?;
        submit(&form).map(|nav| nav.to_url()).map_err(to_js_error)
    }

    /// 解析关键词输入
    #[wasm_bindgen]
    pub fn parse_keywords(text: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&parse_keywords(text))
            .map_err(|e| to_js_error(format!("序列化关键词失败: {}", e)))
    }

    /// 解码查询字符串
    #[wasm_bindgen]
    pub fn decode_query(query: &str) -> Result<JsValue, JsValue> {
        let descriptor = query_common::decode(query).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&descriptor).map_err(|e| to_js_error(format!("序列化查询失败: {}", e)))
    }

    /// 由查询字符串还原关键词输入框文字
    #[wasm_bindgen]
    pub fn keyword_text(query: &str) -> Result<String, JsValue> {
        let descriptor = query_common::decode(query).map_err(to_js_error)?;
        Ok(render_keywords(&descriptor.keywords))
    }

    /// 计算翻页地址，页码越界时返回 `undefined`
    #[wasm_bindgen]
    pub fn pager_target(request_json: &str) -> Result<Option<String>, JsValue> {
        let request: PagerRequest = serde_json::from_str(request_json).map_err(|e| to_js_error(FormError::from(e)))?;
        request.target().map_err(to_js_error)
    }
}
