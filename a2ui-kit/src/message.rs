//! Protocol Message Types
//!
//! Rust types for the inbound message stream. A batch is an ordered JSON
//! array; each element carries at most one of the four surface operations:
//!
//! ```text
//! {"createSurface":   {"surfaceId": "main", "catalogId": "standard"}}
//! {"updateComponents":{"surfaceId": "main", "components": [...]}}
//! {"updateDataModel": {"surfaceId": "main", "path": "/", "value": {...}}}
//! {"deleteSurface":   {"surfaceId": "main"}}
//! ```
//!
//! Components are parsed into a closed tagged union once at ingestion;
//! unrecognized types and malformed property bags degrade to
//! [`ComponentKind::Unknown`] instead of failing the batch. The producer is
//! an LLM, so individual fields are treated as untrusted throughout.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::catalog::ComponentTypeId;
use crate::value::BindableValue;

/// Lenient f64 deserializer: accepts numbers, ignores other types.
fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let val = Option::<Value>::deserialize(d)?.and_then(|v| v.as_f64());
    Ok(val)
}

/// Lenient component-list deserializer: malformed entries are skipped with
/// a warning rather than poisoning the whole batch.
fn lenient_components<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Component>, D::Error> {
    let raw = Vec::<Value>::deserialize(d)?;
    let components = raw
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Component>(entry) {
            Ok(component) => Some(component),
            Err(err) => {
                log::warn!("skipping malformed component definition: {err}");
                None
            }
        })
        .collect();
    Ok(components)
}

/// One element of an inbound message batch.
///
/// An element normally carries exactly one operation. An element carrying
/// several applies them in a fixed order (create, components, data, delete);
/// producers must not rely on that order. An element carrying none is a
/// malformed batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageEnvelope {
    /// Create (or reset) a surface
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_surface: Option<CreateSurface>,

    /// Insert or overwrite components
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_components: Option<UpdateComponents>,

    /// Mutate the data model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_data_model: Option<UpdateDataModel>,

    /// Remove a surface
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_surface: Option<DeleteSurface>,
}

impl MessageEnvelope {
    /// Build a `createSurface` message
    pub fn create_surface(surface_id: impl Into<String>, catalog_id: impl Into<String>) -> Self {
        MessageEnvelope {
            create_surface: Some(CreateSurface {
                surface_id: surface_id.into(),
                catalog_id: Some(catalog_id.into()),
            }),
            ..MessageEnvelope::default()
        }
    }

    /// Build an `updateComponents` message
    pub fn update_components(surface_id: impl Into<String>, components: Vec<Component>) -> Self {
        MessageEnvelope {
            update_components: Some(UpdateComponents {
                surface_id: surface_id.into(),
                components,
            }),
            ..MessageEnvelope::default()
        }
    }

    /// Build an `updateDataModel` message that sets `value` at `path`
    pub fn update_data_model(
        surface_id: impl Into<String>,
        path: impl Into<String>,
        value: Value,
    ) -> Self {
        MessageEnvelope {
            update_data_model: Some(UpdateDataModel {
                surface_id: surface_id.into(),
                path: Some(path.into()),
                op: None,
                value: Some(value),
            }),
            ..MessageEnvelope::default()
        }
    }

    /// Build an `updateDataModel` message that removes the value at `path`
    pub fn remove_data(surface_id: impl Into<String>, path: impl Into<String>) -> Self {
        MessageEnvelope {
            update_data_model: Some(UpdateDataModel {
                surface_id: surface_id.into(),
                path: Some(path.into()),
                op: Some(DataOp::Remove),
                value: None,
            }),
            ..MessageEnvelope::default()
        }
    }

    /// Build a `deleteSurface` message
    pub fn delete_surface(surface_id: impl Into<String>) -> Self {
        MessageEnvelope {
            delete_surface: Some(DeleteSurface {
                surface_id: surface_id.into(),
            }),
            ..MessageEnvelope::default()
        }
    }

    /// Whether the element carries no recognized operation
    pub fn is_empty(&self) -> bool {
        self.create_surface.is_none()
            && self.update_components.is_none()
            && self.update_data_model.is_none()
            && self.delete_surface.is_none()
    }

    /// The surface this message targets
    pub fn surface_id(&self) -> Option<&str> {
        if let Some(m) = &self.create_surface {
            return Some(&m.surface_id);
        }
        if let Some(m) = &self.update_components {
            return Some(&m.surface_id);
        }
        if let Some(m) = &self.update_data_model {
            return Some(&m.surface_id);
        }
        if let Some(m) = &self.delete_surface {
            return Some(&m.surface_id);
        }
        None
    }
}

/// Create (or reset) a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSurface {
    /// Unique identifier for this surface
    pub surface_id: String,

    /// Which component vocabulary is in effect (informational)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<String>,
}

/// Insert or fully overwrite components on a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComponents {
    /// Target surface ID
    pub surface_id: String,

    /// Components to insert or overwrite, keyed by their `id`
    #[serde(default, deserialize_with = "lenient_components")]
    pub components: Vec<Component>,
}

/// Mutate a surface's data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDataModel {
    /// Target surface ID
    pub surface_id: String,

    /// Target path; absent means the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Operation; `add` and `replace` both set, `remove` deletes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<DataOp>,

    /// New value; a message without one is a no-op (except `remove`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Data-model operation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataOp {
    Add,
    Replace,
    Remove,
    #[serde(other)]
    Unknown,
}

/// Remove a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSurface {
    /// Surface ID to delete
    pub surface_id: String,
}

// ============================================================================
// Components
// ============================================================================

/// One typed node in a surface's component graph.
///
/// Wire shape: `{"id": "title", "type": "Text", "text": {...}, ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Unique component ID within its surface
    pub id: String,

    /// The component type and its properties
    pub kind: ComponentKind,
}

impl Component {
    /// Create a component from its parts
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Component {
            id: id.into(),
            kind,
        }
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let mut fields = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        let id = match fields.remove("id") {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => return Err(D::Error::custom("component without an id")),
        };
        let type_name = match fields.remove("type") {
            Some(Value::String(name)) => name,
            _ => return Err(D::Error::custom("component without a type")),
        };
        let kind = ComponentKind::from_parts(&type_name, Value::Object(fields));
        Ok(Component { id, kind })
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error;

        let props = self.kind.properties_value().map_err(S::Error::custom)?;
        let mut fields = serde_json::Map::new();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        fields.insert(
            "type".to_string(),
            Value::String(self.kind.type_name().to_string()),
        );
        if let Value::Object(props) = props {
            fields.extend(props);
        }
        fields.serialize(serializer)
    }
}

/// Component type and properties - each variant is a different widget type.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    // Display
    Text(TextProps),
    Image(ImageProps),
    Icon(IconProps),
    Divider(DividerProps),

    // Layout
    Row(RowProps),
    Column(ColumnProps),
    List(ListProps),
    Card(CardProps),

    // Interactive
    Button(ButtonProps),
    TextField(TextFieldProps),
    CheckBox(CheckBoxProps),
    Slider(SliderProps),
    MultipleChoice(MultipleChoiceProps),
    DateTimeInput(DateTimeInputProps),

    // Container
    Tabs(TabsProps),
    Modal(ModalProps),

    /// Anything outside the catalog. Renders as a visible placeholder so
    /// the failure is debuggable without breaking the rest of the tree.
    Unknown {
        type_name: String,
        properties: Value,
    },
}

impl ComponentKind {
    /// Parse a type tag plus its property bag.
    ///
    /// A known type with a malformed property bag degrades to `Unknown`
    /// instead of failing; the batch producer is untrusted.
    pub fn from_parts(type_name: &str, properties: Value) -> Self {
        let Some(type_id) = ComponentTypeId::parse(type_name) else {
            return ComponentKind::Unknown {
                type_name: type_name.to_string(),
                properties,
            };
        };

        fn props<T: serde::de::DeserializeOwned>(v: &Value) -> Result<T, serde_json::Error> {
            serde_json::from_value(v.clone())
        }

        let parsed = match type_id {
            ComponentTypeId::Text => props(&properties).map(ComponentKind::Text),
            ComponentTypeId::Image => props(&properties).map(ComponentKind::Image),
            ComponentTypeId::Icon => props(&properties).map(ComponentKind::Icon),
            ComponentTypeId::Divider => props(&properties).map(ComponentKind::Divider),
            ComponentTypeId::Row => props(&properties).map(ComponentKind::Row),
            ComponentTypeId::Column => props(&properties).map(ComponentKind::Column),
            ComponentTypeId::List => props(&properties).map(ComponentKind::List),
            ComponentTypeId::Card => props(&properties).map(ComponentKind::Card),
            ComponentTypeId::Button => props(&properties).map(ComponentKind::Button),
            ComponentTypeId::TextField => props(&properties).map(ComponentKind::TextField),
            ComponentTypeId::CheckBox => props(&properties).map(ComponentKind::CheckBox),
            ComponentTypeId::Slider => props(&properties).map(ComponentKind::Slider),
            ComponentTypeId::MultipleChoice => {
                props(&properties).map(ComponentKind::MultipleChoice)
            }
            ComponentTypeId::DateTimeInput => props(&properties).map(ComponentKind::DateTimeInput),
            ComponentTypeId::Tabs => props(&properties).map(ComponentKind::Tabs),
            ComponentTypeId::Modal => props(&properties).map(ComponentKind::Modal),
        };

        match parsed {
            Ok(kind) => kind,
            Err(err) => {
                log::warn!("malformed {type_name} properties: {err}");
                ComponentKind::Unknown {
                    type_name: type_name.to_string(),
                    properties,
                }
            }
        }
    }

    /// The wire-format type name
    pub fn type_name(&self) -> &str {
        match self {
            ComponentKind::Text(_) => ComponentTypeId::Text.name(),
            ComponentKind::Image(_) => ComponentTypeId::Image.name(),
            ComponentKind::Icon(_) => ComponentTypeId::Icon.name(),
            ComponentKind::Divider(_) => ComponentTypeId::Divider.name(),
            ComponentKind::Row(_) => ComponentTypeId::Row.name(),
            ComponentKind::Column(_) => ComponentTypeId::Column.name(),
            ComponentKind::List(_) => ComponentTypeId::List.name(),
            ComponentKind::Card(_) => ComponentTypeId::Card.name(),
            ComponentKind::Button(_) => ComponentTypeId::Button.name(),
            ComponentKind::TextField(_) => ComponentTypeId::TextField.name(),
            ComponentKind::CheckBox(_) => ComponentTypeId::CheckBox.name(),
            ComponentKind::Slider(_) => ComponentTypeId::Slider.name(),
            ComponentKind::MultipleChoice(_) => ComponentTypeId::MultipleChoice.name(),
            ComponentKind::DateTimeInput(_) => ComponentTypeId::DateTimeInput.name(),
            ComponentKind::Tabs(_) => ComponentTypeId::Tabs.name(),
            ComponentKind::Modal(_) => ComponentTypeId::Modal.name(),
            ComponentKind::Unknown { type_name, .. } => type_name,
        }
    }

    fn properties_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            ComponentKind::Text(p) => serde_json::to_value(p),
            ComponentKind::Image(p) => serde_json::to_value(p),
            ComponentKind::Icon(p) => serde_json::to_value(p),
            ComponentKind::Divider(p) => serde_json::to_value(p),
            ComponentKind::Row(p) => serde_json::to_value(p),
            ComponentKind::Column(p) => serde_json::to_value(p),
            ComponentKind::List(p) => serde_json::to_value(p),
            ComponentKind::Card(p) => serde_json::to_value(p),
            ComponentKind::Button(p) => serde_json::to_value(p),
            ComponentKind::TextField(p) => serde_json::to_value(p),
            ComponentKind::CheckBox(p) => serde_json::to_value(p),
            ComponentKind::Slider(p) => serde_json::to_value(p),
            ComponentKind::MultipleChoice(p) => serde_json::to_value(p),
            ComponentKind::DateTimeInput(p) => serde_json::to_value(p),
            ComponentKind::Tabs(p) => serde_json::to_value(p),
            ComponentKind::Modal(p) => serde_json::to_value(p),
            ComponentKind::Unknown { properties, .. } => Ok(properties.clone()),
        }
    }
}

/// Children reference - either explicit list or template-based
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChildrenRef {
    /// Explicit ordered list of child component IDs
    ExplicitList(Vec<String>),

    /// One component definition instantiated per element of bound data
    Template(TemplateRef),
}

impl Default for ChildrenRef {
    fn default() -> Self {
        ChildrenRef::ExplicitList(vec![])
    }
}

/// Template-based children binding
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRef {
    /// Component definition to instantiate per item
    pub component_id: String,

    /// Data-model path to the backing array or mapping
    pub data_binding: String,
}

// ============================================================================
// Display components
// ============================================================================

/// Text display
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextProps {
    /// Text content (literal or path-bound)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<BindableValue>,

    /// Structural role hint (h1..h5, caption, body)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_hint: Option<TextUsageHint>,
}

/// Image display
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProps {
    /// Image URL (literal or path-bound)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<BindableValue>,

    /// Fit mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,

    /// Sizing role hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_hint: Option<ImageUsageHint>,
}

/// Icon display
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconProps {
    /// Icon name as a camel-case token (e.g. "arrowBack")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<BindableValue>,
}

/// Visual separator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DividerProps {
    /// Orientation, default horizontal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
}

// ============================================================================
// Layout components
// ============================================================================

/// Horizontal layout container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowProps {
    /// Child component references
    pub children: ChildrenRef,

    /// Main-axis distribution, default start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,

    /// Cross-axis alignment, default center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// Vertical layout container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnProps {
    /// Child component references
    pub children: ChildrenRef,

    /// Main-axis distribution, default start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,

    /// Cross-axis alignment, default center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// Scrollable list container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListProps {
    /// Child component references (usually template-based)
    pub children: ChildrenRef,

    /// Scroll direction, default vertical
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Axis>,

    /// Main-axis distribution, default start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Distribution>,

    /// Cross-axis alignment, default center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// Card container with a single child
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardProps {
    /// Child component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,
}

// ============================================================================
// Interactive components
// ============================================================================

/// Clickable button
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonProps {
    /// Child component ID (button content)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,

    /// Whether this is the primary action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,

    /// Action payload, opaque to the interpreter; the host application owns
    /// event handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Value>,
}

/// Text input field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextFieldProps {
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<BindableValue>,

    /// Current value (path-bound for two-way binding)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<BindableValue>,

    /// Input category, default shortText
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_field_type: Option<TextFieldKind>,

    /// Optional validation pattern, passed through to presentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_regexp: Option<String>,
}

/// Boolean toggle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckBoxProps {
    /// Label text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<BindableValue>,

    /// Current checked state (path-bound)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<BindableValue>,
}

/// Numeric range slider
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderProps {
    /// Current value (path-bound)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<BindableValue>,

    /// Lower bound, default 0
    #[serde(deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    /// Upper bound, default 100
    #[serde(deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
}

/// Selection from multiple options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MultipleChoiceProps {
    /// Currently selected option values (path-bound array)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selections: Option<BindableValue>,

    /// Available options
    pub options: Vec<ChoiceOption>,

    /// Selection limit
    #[serde(deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub max_allowed_selections: Option<f64>,
}

/// A single choice option
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceOption {
    /// Display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<BindableValue>,

    /// Option value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Date and/or time entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateTimeInputProps {
    /// Current value (path-bound)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<BindableValue>,

    /// Whether a date can be entered, default true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_date: Option<bool>,

    /// Whether a time can be entered, default true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_time: Option<bool>,
}

// ============================================================================
// Container components
// ============================================================================

/// Tabbed interface
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabsProps {
    /// Tab definitions
    pub tab_items: Vec<TabItem>,
}

/// A single tab definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabItem {
    /// Tab title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<BindableValue>,

    /// Content component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,
}

/// Modal dialog overlay
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModalProps {
    /// Component that opens the modal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point_child: Option<String>,

    /// Modal content component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_child: Option<String>,
}

// ============================================================================
// Enums
// ============================================================================

/// Structural role hints for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextUsageHint {
    H1,
    H2,
    H3,
    H4,
    H5,
    Body,
    Caption,
    #[serde(other)]
    Unknown,
}

/// Image fit modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageFit {
    Contain,
    Cover,
    Fill,
    ScaleDown,
    #[serde(other)]
    Unknown,
}

/// Sizing role hints for images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageUsageHint {
    Icon,
    Avatar,
    SmallFeature,
    MediumFeature,
    LargeFeature,
    Header,
    #[serde(other)]
    Unknown,
}

/// Orientation for dividers and list scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Horizontal,
    Vertical,
    #[serde(other)]
    Unknown,
}

/// Main-axis distribution for Row/Column/List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Distribution {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    #[serde(other)]
    Unknown,
}

/// Cross-axis alignment for Row/Column/List
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Start,
    Center,
    End,
    Stretch,
    #[serde(other)]
    Unknown,
}

/// Text input categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextFieldKind {
    Date,
    LongText,
    Number,
    ShortText,
    Obscured,
    #[serde(other)]
    Unknown,
}
