//! Tree Renderer
//!
//! Walks a surface's component graph from its `"root"` entry point and
//! projects it onto a [`VisualNode`] tree that any presentation layer (DOM,
//! native widget tree, terminal UI) can consume by implementing one
//! rendering function per tag.
//!
//! Rendering is a pure, repeatable projection of the surface store: it keeps
//! no state of its own, threads the current context path through the
//! recursive calls as a parameter, and renders unchanged state to
//! structurally identical output. It only ever reads the store.

use serde::Serialize;
use serde_json::Value;

use crate::data_model::DataModel;
use crate::message::{
    Alignment, Axis, ChildrenRef, Component, ComponentKind, Distribution, ImageFit,
    ImageUsageHint, TextFieldKind, TextUsageHint,
};
use crate::surface::{Surface, SurfaceStore};
use crate::value::{BindableValue, compose_path};

/// A generic tagged visual tree with resolved attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualNode {
    /// Nothing to show; the sentinel for absent surfaces, missing roots,
    /// and content-less components.
    Empty,

    /// A run of text with a structural role
    Text { content: String, role: TextRole },

    /// An image with resolved source and sizing hints
    Image {
        url: String,
        fit: ImageFit,
        sizing: ImageUsageHint,
    },

    /// A named icon, in snake_case presentation convention
    Icon { name: String },

    /// A linear container: Row, Column, or List
    Stack {
        axis: Axis,
        scrollable: bool,
        distribution: Distribution,
        alignment: Alignment,
        children: Vec<VisualNode>,
    },

    /// A card wrapping a single child
    Card { child: Option<Box<VisualNode>> },

    /// A button wrapping a single child; the action payload is opaque and
    /// handed to the host application's event handling untouched.
    Button {
        primary: bool,
        child: Option<Box<VisualNode>>,
        action: Option<Value>,
    },

    /// A text entry control
    TextField {
        label: String,
        text: String,
        kind: TextFieldKind,
        validation_regexp: Option<String>,
    },

    /// A boolean toggle
    CheckBox { label: String, checked: bool },

    /// A numeric range control
    Slider { value: f64, min: f64, max: f64 },

    /// A date/time entry control
    DateTimeInput { value: String, date: bool, time: bool },

    /// A closed set of selectable options
    MultipleChoice {
        selections: Vec<String>,
        options: Vec<ChoiceItem>,
        max_selections: Option<u64>,
    },

    /// A horizontal or vertical separator
    Divider { axis: Axis },

    /// A tabbed container
    Tabs { tabs: Vec<TabPane> },

    /// A modal overlay with its trigger and content
    Modal {
        trigger: Option<Box<VisualNode>>,
        content: Option<Box<VisualNode>>,
    },

    /// Visible marker for a component type outside the catalog
    Placeholder { type_name: String },
}

/// Structural text roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    H1,
    H2,
    H3,
    H4,
    H5,
    Caption,
    Body,
}

/// One resolved option of a MultipleChoice
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceItem {
    pub label: String,
    pub value: String,
}

/// One resolved tab of a Tabs container
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPane {
    pub title: String,
    pub content: VisualNode,
}

/// Render a surface's current state to a visual tree.
///
/// An absent surface, or a surface with no `"root"` component, renders to
/// [`VisualNode::Empty`].
pub fn render_surface(store: &SurfaceStore, surface_id: &str) -> VisualNode {
    let Some(surface) = store.get(surface_id) else {
        return VisualNode::Empty;
    };
    let Some(root) = surface.root_component() else {
        return VisualNode::Empty;
    };
    render_component(surface, root, "")
}

/// Render one component under the given context path.
fn render_component(surface: &Surface, component: &Component, context: &str) -> VisualNode {
    let model = surface.data_model();
    match &component.kind {
        ComponentKind::Text(text) => VisualNode::Text {
            content: resolve_text(&text.text, model, context),
            role: text_role(text.usage_hint),
        },
        ComponentKind::Image(image) => {
            let Some(url) = resolve_text_nonempty(&image.url, model, context) else {
                // No source resolves to no content.
                return VisualNode::Empty;
            };
            VisualNode::Image {
                url,
                fit: match image.fit {
                    Some(ImageFit::Unknown) | None => ImageFit::Cover,
                    Some(fit) => fit,
                },
                sizing: match image.usage_hint {
                    Some(ImageUsageHint::Unknown) | None => ImageUsageHint::MediumFeature,
                    Some(hint) => hint,
                },
            }
        }
        ComponentKind::Icon(icon) => VisualNode::Icon {
            name: snake_case_icon_name(&resolve_text(&icon.name, model, context)),
        },
        ComponentKind::Row(row) => VisualNode::Stack {
            axis: Axis::Horizontal,
            scrollable: false,
            distribution: distribution_or_default(row.distribution),
            alignment: alignment_or_default(row.alignment),
            children: render_children(surface, &row.children, context),
        },
        ComponentKind::Column(column) => VisualNode::Stack {
            axis: Axis::Vertical,
            scrollable: false,
            distribution: distribution_or_default(column.distribution),
            alignment: alignment_or_default(column.alignment),
            children: render_children(surface, &column.children, context),
        },
        ComponentKind::List(list) => VisualNode::Stack {
            axis: match list.direction {
                Some(Axis::Horizontal) => Axis::Horizontal,
                _ => Axis::Vertical,
            },
            scrollable: true,
            distribution: distribution_or_default(list.distribution),
            alignment: alignment_or_default(list.alignment),
            children: render_children(surface, &list.children, context),
        },
        ComponentKind::Card(card) => VisualNode::Card {
            child: render_child_by_id(surface, card.child.as_deref(), context),
        },
        ComponentKind::Button(button) => VisualNode::Button {
            primary: button.primary.unwrap_or(false),
            child: render_child_by_id(surface, button.child.as_deref(), context),
            action: button.action.clone(),
        },
        ComponentKind::TextField(field) => VisualNode::TextField {
            label: resolve_text(&field.label, model, context),
            text: resolve_text(&field.text, model, context),
            kind: match field.text_field_type {
                Some(TextFieldKind::Unknown) | None => TextFieldKind::ShortText,
                Some(kind) => kind,
            },
            validation_regexp: field.validation_regexp.clone(),
        },
        ComponentKind::CheckBox(checkbox) => VisualNode::CheckBox {
            label: resolve_text(&checkbox.label, model, context),
            checked: checkbox
                .value
                .as_ref()
                .and_then(|v| v.resolve_bool(model, context))
                .unwrap_or(false),
        },
        ComponentKind::Slider(slider) => {
            let min = slider.min_value.unwrap_or(0.0);
            let max = slider.max_value.unwrap_or(100.0);
            VisualNode::Slider {
                value: slider
                    .value
                    .as_ref()
                    .and_then(|v| v.resolve_number(model, context))
                    .unwrap_or((min + max) / 2.0),
                min,
                max,
            }
        }
        ComponentKind::DateTimeInput(input) => VisualNode::DateTimeInput {
            value: resolve_text(&input.value, model, context),
            date: input.enable_date.unwrap_or(true),
            time: input.enable_time.unwrap_or(true),
        },
        ComponentKind::MultipleChoice(choice) => VisualNode::MultipleChoice {
            selections: choice
                .selections
                .as_ref()
                .and_then(|v| v.resolve_array(model, context))
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_owned))
                        .collect()
                })
                .unwrap_or_default(),
            options: choice
                .options
                .iter()
                .map(|option| ChoiceItem {
                    label: resolve_text(&option.label, model, context),
                    value: option.value.clone().unwrap_or_default(),
                })
                .collect(),
            max_selections: choice
                .max_allowed_selections
                .filter(|n| *n >= 0.0)
                .map(|n| n as u64),
        },
        ComponentKind::Divider(divider) => VisualNode::Divider {
            axis: match divider.axis {
                Some(Axis::Vertical) => Axis::Vertical,
                _ => Axis::Horizontal,
            },
        },
        ComponentKind::Tabs(tabs) => VisualNode::Tabs {
            tabs: tabs
                .tab_items
                .iter()
                .map(|tab| TabPane {
                    title: resolve_text(&tab.title, model, context),
                    content: render_child_by_id(surface, tab.child.as_deref(), context)
                        .map(|boxed| *boxed)
                        .unwrap_or(VisualNode::Empty),
                })
                .collect(),
        },
        ComponentKind::Modal(modal) => VisualNode::Modal {
            trigger: render_child_by_id(surface, modal.entry_point_child.as_deref(), context),
            content: render_child_by_id(surface, modal.content_child.as_deref(), context),
        },
        ComponentKind::Unknown { type_name, .. } => {
            log::warn!("rendering placeholder for unknown component type {type_name}");
            VisualNode::Placeholder {
                type_name: type_name.clone(),
            }
        }
    }
}

/// Render a children reference in document order.
///
/// Dangling ids in an explicit list are skipped. A template instantiates
/// its component once per array element (index order) or mapping key
/// (key enumeration order), each instance under its own context path.
fn render_children(surface: &Surface, children: &ChildrenRef, context: &str) -> Vec<VisualNode> {
    match children {
        ChildrenRef::ExplicitList(ids) => ids
            .iter()
            .filter_map(|id| surface.component(id))
            .map(|child| render_component(surface, child, context))
            .collect(),
        ChildrenRef::Template(template) => {
            let Some(item) = surface.component(&template.component_id) else {
                log::debug!(
                    "template component {} not found, rendering nothing",
                    template.component_id
                );
                return Vec::new();
            };
            let binding = compose_path(&template.data_binding, context);
            let item_keys: Vec<String> = match surface.data_model().get(&binding) {
                Some(Value::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
                Some(Value::Object(map)) => map.keys().cloned().collect(),
                _ => return Vec::new(),
            };
            item_keys
                .iter()
                .map(|key| {
                    let item_context = format!("{}/{}", binding.trim_end_matches('/'), key);
                    render_component(surface, item, &item_context)
                })
                .collect()
        }
    }
}

/// Render a single child referenced by id; dangling ids render no content.
fn render_child_by_id(
    surface: &Surface,
    child_id: Option<&str>,
    context: &str,
) -> Option<Box<VisualNode>> {
    let child = surface.component(child_id?)?;
    Some(Box::new(render_component(surface, child, context)))
}

/// Resolve an optional bindable value to display text, empty if undefined.
fn resolve_text(value: &Option<BindableValue>, model: &DataModel, context: &str) -> String {
    value
        .as_ref()
        .and_then(|v| v.resolve(model, context))
        .map(|v| display_text(&v))
        .unwrap_or_default()
}

fn resolve_text_nonempty(
    value: &Option<BindableValue>,
    model: &DataModel,
    context: &str,
) -> Option<String> {
    Some(resolve_text(value, model, context)).filter(|s| !s.is_empty())
}

/// Coerce a resolved scalar to display text.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
                    format!("{f:.0}")
                } else {
                    f.to_string()
                }
            } else {
                n.to_string()
            }
        }
        Value::Bool(b) => b.to_string(),
        // Structured values have no text rendition.
        _ => String::new(),
    }
}

fn text_role(hint: Option<TextUsageHint>) -> TextRole {
    match hint {
        Some(TextUsageHint::H1) => TextRole::H1,
        Some(TextUsageHint::H2) => TextRole::H2,
        Some(TextUsageHint::H3) => TextRole::H3,
        Some(TextUsageHint::H4) => TextRole::H4,
        Some(TextUsageHint::H5) => TextRole::H5,
        Some(TextUsageHint::Caption) => TextRole::Caption,
        Some(TextUsageHint::Body) | Some(TextUsageHint::Unknown) | None => TextRole::Body,
    }
}

fn distribution_or_default(distribution: Option<Distribution>) -> Distribution {
    match distribution {
        Some(Distribution::Unknown) | None => Distribution::Start,
        Some(other) => other,
    }
}

fn alignment_or_default(alignment: Option<Alignment>) -> Alignment {
    match alignment {
        Some(Alignment::Unknown) | None => Alignment::Center,
        Some(other) => other,
    }
}

/// Convert a camel-case icon token to the presentation layer's snake_case
/// convention: an `_` is inserted before each capital letter, which is then
/// lowercased. `arrowBack` becomes `arrow_back`.
fn snake_case_icon_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_uppercase() {
            out.push('_');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
