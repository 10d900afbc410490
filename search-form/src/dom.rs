use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlElement, HtmlInputElement, Window};

use crate::config::FormConfig;
use crate::encoder::submit;
use crate::error::FormError;
use crate::pager::PagerRequest;
use crate::state::FormState;
use crate::toggle::{CyclePolicy, FilterItem, FilterState};

/// 页面绑定 - 读取表单快照、挂载点击事件、执行跳转
#[derive(Clone)]
pub struct FormBinding {
    config: FormConfig,
    window: Window,
    document: Document,
}

impl FormBinding {
    pub fn new(config: FormConfig) -> Result<Self, FormError> {
        let window = web_sys::window().ok_or_else(|| FormError::MissingElement("window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| FormError::MissingElement("document".to_string()))?;
        Ok(Self {
            config,
            window,
            document,
        })
    }

    /// 挂载全部事件
    pub fn attach(&self) -> Result<(), FormError> {
        self.bind_group(&self.config.year_box, CyclePolicy::Year)?;
        self.bind_group(&self.config.tag_box, CyclePolicy::Tag)?;
        self.bind_group(&self.config.r18_box, CyclePolicy::Single3)?;
        self.bind_group(&self.config.fav_box, CyclePolicy::Single3)?;
        self.bind_submit()?;
        // 只有结果页才有翻页控件
        if self.document.get_element_by_id(&self.config.pager_submit).is_some() {
            self.bind_pager()?;
        }
        console::log_1(&JsValue::from_str("搜索表单已绑定"));
        Ok(())
    }

    fn element(&self, id: &str) -> Result<Element, FormError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FormError::MissingElement(format!("#{}", id)))
    }

    fn input(&self, id: &str) -> Result<HtmlInputElement, FormError> {
        self.element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| FormError::Dom(format!("#{} 不是输入框", id)))
    }

    fn html(&self, id: &str) -> Result<HtmlElement, FormError> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| FormError::Dom(format!("#{} 不是 HTML 元素", id)))
    }

    /// 分组内的全部筛选项元素
    fn items(&self, group_id: &str) -> Result<Vec<HtmlElement>, FormError> {
        let collection = self.element(group_id)?.get_elements_by_class_name(&self.config.item_class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(|el| {
                el.dyn_into::<HtmlElement>()
                    .map_err(|_| FormError::Dom(format!("#{} 中的筛选项不是 HTML 元素", group_id)))
            })
            .collect()
    }

    /// 单项三态控件只取第一个筛选项
    fn single_state(&self, group_id: &str) -> Result<FilterState, FormError> {
        let items = self.items(group_id)?;
        let first = items
            .first()
            .ok_or_else(|| FormError::MissingElement(format!("#{} .{}", group_id, self.config.item_class)))?;
        Ok(read_item(first).state)
    }

    fn bind_group(&self, group_id: &str, policy: CyclePolicy) -> Result<(), FormError> {
        for el in self.items(group_id)? {
            let target = el.clone();
            let handler = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
                let mut item = read_item(&target);
                item.click(policy);
                if let Err(e) = write_item(&target, &item, policy) {
                    fail(e);
                }
            });
            el.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
                .map_err(dom_error)?;
            // 与页面同生命周期
            handler.forget();
        }
        Ok(())
    }

    /// 从页面读取提交时的表单快照
    pub fn snapshot(&self) -> Result<FormState, FormError> {
        let read_group = |id: &str| -> Result<Vec<FilterItem>, FormError> {
            Ok(self.items(id)?.iter().map(read_item).collect())
        };
        Ok(FormState {
            keyword_text: self.input(&self.config.keyword_box)?.value(),
            tags: read_group(&self.config.tag_box)?,
            years: read_group(&self.config.year_box)?,
            user_text: self.input(&self.config.user_box)?.value(),
            r18: self.single_state(&self.config.r18_box)?,
            fav: self.single_state(&self.config.fav_box)?,
        })
    }

    fn bind_submit(&self) -> Result<(), FormError> {
        let binding = self.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            match binding.snapshot().and_then(|form| submit(&form)) {
                Ok(nav) => {
                    ev.stop_propagation();
                    ev.prevent_default();
                    binding.navigate(&nav.to_url());
                }
                Err(e) if e.is_query_too_long() => {
                    console::warn_1(&JsValue::from_str(&e.to_string()));
                    if let Err(e) = binding.window.alert_with_message(&binding.config.too_long_message) {
                        fail(dom_error(e));
                    }
                }
                Err(e) => fail(e),
            }
        });
        self.element(&self.config.submit_button)?
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        handler.forget();
        Ok(())
    }

    /// 读取翻页请求，页码不是数字时返回 `None`
    pub fn pager_request(&self) -> Result<Option<PagerRequest>, FormError> {
        let value = self.input(&self.config.pager_value)?;
        let ordering_index = self
            .html(&self.config.sort_mode)?
            .dataset()
            .get("ord")
            .ok_or_else(|| FormError::MissingElement(format!("#{} [data-ord]", self.config.sort_mode)))?;
        let ordering_index = ordering_index
            .trim()
            .parse::<usize>()
            .map_err(|_| FormError::Dom(format!("无效的排序下标: {:?}", ordering_index)))?;
        let base_path = self
            .html(&self.config.search_panel)?
            .dataset()
            .get("origBase")
            .ok_or_else(|| FormError::MissingElement(format!("#{} [data-orig-base]", self.config.search_panel)))?;

        let parse = |s: String| s.trim().parse::<i64>().ok();
        let (Some(page_number), Some(min), Some(max)) = (parse(value.value()), parse(value.min()), parse(value.max()))
        else {
            return Ok(None);
        };
        Ok(Some(PagerRequest {
            page_number,
            min,
            max,
            ordering_index,
            base_path,
        }))
    }

    fn bind_pager(&self) -> Result<(), FormError> {
        let binding = self.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            let target = binding
                .pager_request()
                .and_then(|req| req.map(|r| r.target()).transpose().map(Option::flatten));
            match target {
                Ok(Some(url)) => {
                    ev.stop_propagation();
                    ev.prevent_default();
                    binding.navigate(&url);
                }
                // 页码越界不做任何事
                Ok(None) => {}
                Err(e) => fail(e),
            }
        });
        self.element(&self.config.pager_submit)?
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        handler.forget();
        Ok(())
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            fail(dom_error(e));
        }
    }
}

fn read_item(el: &HtmlElement) -> FilterItem {
    let classes = el.class_list();
    let state = FilterState::from_classes(
        classes.contains(FilterState::POSITIVE_CLASS),
        classes.contains(FilterState::NEGATIVE_CLASS),
    );
    FilterItem::with_state(el.inner_text(), state)
}

fn write_item(el: &HtmlElement, item: &FilterItem, policy: CyclePolicy) -> Result<(), FormError> {
    let classes = el.class_list();
    classes
        .remove_2(FilterState::POSITIVE_CLASS, FilterState::NEGATIVE_CLASS)
        .map_err(dom_error)?;
    if let Some(class) = item.state.class_name() {
        classes.add_1(class).map_err(dom_error)?;
    }
    if policy.label_for(item.state).is_some() {
        el.set_inner_text(&item.label);
    }
    Ok(())
}

fn dom_error(value: JsValue) -> FormError {
    FormError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// 页面结构错误，记录后抛给 JS
fn fail(e: FormError) -> ! {
    let message = e.to_string();
    console::error_1(&JsValue::from_str(&message));
    wasm_bindgen::throw_str(&message)
}
