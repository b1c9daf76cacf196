//! Star-rating selection component.
//!
//! A star rating consists of a fixed row of star slots; a pointer user
//! hovers the row and clicks a star to commit that rating, keyboard users
//! steer the selection with the arrow and Home/End keys. The component
//! binds a `starrate-core` state machine to DOM events and projects its
//! accessibility snapshot onto the host element.

use std::sync::atomic::{AtomicUsize, Ordering};

use starrate_core::{AriaSnapshot, Key, RatingAccessor};
use yew::prelude::*;

use crate::components::foundation as f;

static UNIQUE_ID: AtomicUsize = AtomicUsize::new(0);

/// Render-time context handed to a host-supplied star renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarContext {
    /// Zero-based slot index.
    pub index: usize,
    /// Whether the slot is highlighted by the current selection or hover
    /// preview.
    pub hovered: bool,
}

/// Properties for the [`Rating`] component.
#[derive(Properties, Clone, PartialEq)]
pub struct RatingProps {
    /// Number of star slots. Zero is clamped to one with a warning; use
    /// `starrate-core` directly for the strict error surface.
    #[prop_or(5)]
    pub size: u32,
    /// Controlled 1-based rating value. Re-applied whenever the prop
    /// changes; zero values are ignored.
    #[prop_or_default]
    pub rating: Option<u32>,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Whether the clear affordance is rendered.
    #[prop_or_default]
    pub show_cancel_icon: bool,
    /// Presentation token for a star slot.
    #[prop_or(AttrValue::Static("★"))]
    pub icon: AttrValue,
    /// Presentation token for the clear affordance.
    #[prop_or(AttrValue::Static("⊘"))]
    pub cancel_icon: AttrValue,
    /// Host element id; auto-generated when absent.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(AttrValue::Static("star"))]
    pub aria_label: AttrValue,
    #[prop_or(AttrValue::Static("Star rating"))]
    pub aria_labelledby: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Emitted with the 1-based value on every committed selection.
    #[prop_or_default]
    pub on_rate_change: Callback<u32>,
    /// Emitted when the selection is cleared through the cancel affordance.
    #[prop_or_default]
    pub on_rate_cancel: Callback<()>,
    /// Emitted when the widget is committed or blurred; form hosts use
    /// this to mark the control dirty.
    #[prop_or_default]
    pub on_touched: Callback<()>,
    /// Override the way each star is displayed. Receives only
    /// [`StarContext`], independent of how the slot markup consumes it.
    #[prop_or_default]
    pub render_star: Option<Callback<StarContext, Html>>,
    /// Optional label content, rendered after the stars.
    #[prop_or_default]
    pub children: Children,
}

/// Messages for the rating component.
pub enum Msg {
    Hover(usize),
    Leave,
    Click(usize),
    Cancel,
    KeyDown(KeyboardEvent),
    Blur,
}

/// The star-rating component state.
pub struct Rating {
    accessor: RatingAccessor,
    id: AttrValue,
}

impl Component for Rating {
    type Message = Msg;
    type Properties = RatingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            accessor: build_accessor(props),
            id: props.id.clone().unwrap_or_else(next_id),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hover(index) => {
                self.accessor.preview_hover(index);
                true
            }
            Msg::Leave => {
                self.accessor.mouse_leave();
                true
            }
            Msg::Click(index) => {
                self.accessor.commit_selection(index);
                true
            }
            Msg::Cancel => {
                self.accessor.cancel_selection();
                true
            }
            Msg::KeyDown(event) => {
                let Some(key) = Key::from_code(&event.code()) else {
                    return false;
                };
                if self.accessor.handle_key(key) {
                    event.prevent_default();
                    true
                } else {
                    false
                }
            }
            Msg::Blur => {
                self.accessor.blur();
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.size != old_props.size {
            apply_size(&mut self.accessor, props.size);
        }
        self.accessor.set_readonly(props.readonly);
        self.accessor.set_disabled(props.disabled);
        self.accessor.set_show_cancel_icon(props.show_cancel_icon);
        if props.rating != old_props.rating
            && let Some(rating) = props.rating
        {
            apply_rating(&mut self.accessor, rating);
        }
        register_callbacks(&mut self.accessor, props);
        if let Some(id) = &props.id {
            self.id = id.clone();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let state = self.accessor.state();
        let aria = AriaSnapshot::of(state);
        let link = ctx.link();
        let onkeydown = link.callback(Msg::KeyDown);
        let onmouseleave = link.callback(|_: MouseEvent| Msg::Leave);
        let onblur = link.callback(|_: FocusEvent| Msg::Blur);
        let class = f::class_list(&["star-rating"], &props.class);

        html! {
            <div
                id={self.id.clone()}
                class={class}
                role={aria.role}
                tabindex={aria.tab_index.to_string()}
                aria-label={props.aria_label.clone()}
                aria-labelledby={props.aria_labelledby.clone()}
                aria-valuemin={aria.value_min.to_string()}
                aria-valuemax={aria.value_max.to_string()}
                aria-valuenow={aria.value_now.to_string()}
                aria-valuetext={aria.value_text.clone()}
                aria-disabled={aria.disabled.to_string()}
                aria-readonly={aria.readonly.to_string()}
                aria-setsize={aria.set_size.to_string()}
                {onkeydown}
                {onmouseleave}
                {onblur}
            >
                { self.view_cancel(ctx) }
                { for state
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(index, item)| self.view_star(ctx, index, item.hovered)) }
                { self.view_label(props) }
            </div>
        }
    }
}

impl Rating {
    fn view_star(&self, ctx: &Context<Self>, index: usize, hovered: bool) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let onmouseenter = link.callback(move |_: MouseEvent| Msg::Hover(index));
        let onclick = link.callback(move |_: MouseEvent| Msg::Click(index));
        let content = match &props.render_star {
            Some(render) => render.emit(StarContext { index, hovered }),
            None => html! {
                <span class="star-rating__icon">{ props.icon.clone() }</span>
            },
        };
        html! {
            <span
                class={classes!(
                    "star-rating__star",
                    hovered.then_some("star-rating__star--hovered"),
                )}
                {onmouseenter}
                {onclick}
            >
                { content }
            </span>
        }
    }

    fn view_cancel(&self, ctx: &Context<Self>) -> Html {
        if !self.accessor.state().show_cancel_icon() {
            return html! {};
        }
        let props = ctx.props();
        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Cancel);
        html! {
            <span
                class="star-rating__cancel"
                role="button"
                aria-label="Cancel rating"
                {onclick}
            >
                { props.cancel_icon.clone() }
            </span>
        }
    }

    fn view_label(&self, props: &RatingProps) -> Html {
        if props.children.is_empty() {
            return html! {};
        }
        html! {
            <span class="star-rating__label">{ for props.children.iter() }</span>
        }
    }
}

fn next_id() -> AttrValue {
    let id = UNIQUE_ID.fetch_add(1, Ordering::Relaxed);
    AttrValue::from(format!("star-rating-{id}"))
}

/// Clamp the slot count to at least one and resize the machine.
fn apply_size(accessor: &mut RatingAccessor, size: u32) {
    let size = if size == 0 {
        log::warn!("rating size must be greater than zero; clamping to 1");
        1
    } else {
        size as usize
    };
    // size is clamped positive, set_size cannot fail
    let _ = accessor.set_size(size);
}

fn build_accessor(props: &RatingProps) -> RatingAccessor {
    let mut accessor = RatingAccessor::default();
    apply_size(&mut accessor, props.size);
    accessor.set_readonly(props.readonly);
    accessor.set_disabled(props.disabled);
    accessor.set_show_cancel_icon(props.show_cancel_icon);
    if let Some(rating) = props.rating {
        apply_rating(&mut accessor, rating);
    }
    register_callbacks(&mut accessor, props);
    accessor
}

fn apply_rating(accessor: &mut RatingAccessor, rating: u32) {
    if rating == 0 {
        log::warn!("ignoring zero rating prop");
        return;
    }
    // rating is non-zero, set_rating cannot fail
    let _ = accessor.set_rating(rating);
}

fn register_callbacks(accessor: &mut RatingAccessor, props: &RatingProps) {
    let on_rate_change = props.on_rate_change.clone();
    accessor.register_rate_change(move |value| on_rate_change.emit(value));
    let on_rate_cancel = props.on_rate_cancel.clone();
    accessor.register_rate_cancel(move || on_rate_cancel.emit(()));
    let on_touched = props.on_touched.clone();
    accessor.register_on_touched(move || on_touched.emit(()));
}

#[cfg(test)]
mod tests;
