//! Component Catalog
//!
//! The closed set of component type tags the interpreter understands. A
//! surface carries a `catalog_id` naming the vocabulary in effect; the
//! interpreter stores it but does not branch on it. Hosts can use
//! [`ComponentTypeId`] to advertise the supported vocabulary to an agent.

/// Component type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTypeId {
    // Display
    Text,
    Image,
    Icon,
    Divider,

    // Layout
    Row,
    Column,
    List,
    Card,

    // Interactive
    Button,
    TextField,
    CheckBox,
    Slider,
    MultipleChoice,
    DateTimeInput,

    // Container
    Tabs,
    Modal,
}

impl ComponentTypeId {
    /// Get the wire-format type name
    pub fn name(&self) -> &'static str {
        match self {
            ComponentTypeId::Text => "Text",
            ComponentTypeId::Image => "Image",
            ComponentTypeId::Icon => "Icon",
            ComponentTypeId::Divider => "Divider",
            ComponentTypeId::Row => "Row",
            ComponentTypeId::Column => "Column",
            ComponentTypeId::List => "List",
            ComponentTypeId::Card => "Card",
            ComponentTypeId::Button => "Button",
            ComponentTypeId::TextField => "TextField",
            ComponentTypeId::CheckBox => "CheckBox",
            ComponentTypeId::Slider => "Slider",
            ComponentTypeId::MultipleChoice => "MultipleChoice",
            ComponentTypeId::DateTimeInput => "DateTimeInput",
            ComponentTypeId::Tabs => "Tabs",
            ComponentTypeId::Modal => "Modal",
        }
    }

    /// Parse a wire-format type name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Text" => Some(ComponentTypeId::Text),
            "Image" => Some(ComponentTypeId::Image),
            "Icon" => Some(ComponentTypeId::Icon),
            "Divider" => Some(ComponentTypeId::Divider),
            "Row" => Some(ComponentTypeId::Row),
            "Column" => Some(ComponentTypeId::Column),
            "List" => Some(ComponentTypeId::List),
            "Card" => Some(ComponentTypeId::Card),
            "Button" => Some(ComponentTypeId::Button),
            "TextField" => Some(ComponentTypeId::TextField),
            "CheckBox" => Some(ComponentTypeId::CheckBox),
            "Slider" => Some(ComponentTypeId::Slider),
            "MultipleChoice" => Some(ComponentTypeId::MultipleChoice),
            "DateTimeInput" => Some(ComponentTypeId::DateTimeInput),
            "Tabs" => Some(ComponentTypeId::Tabs),
            "Modal" => Some(ComponentTypeId::Modal),
            _ => None,
        }
    }

    /// Get all component types in the standard catalog
    pub fn all() -> &'static [ComponentTypeId] {
        &[
            ComponentTypeId::Text,
            ComponentTypeId::Image,
            ComponentTypeId::Icon,
            ComponentTypeId::Divider,
            ComponentTypeId::Row,
            ComponentTypeId::Column,
            ComponentTypeId::List,
            ComponentTypeId::Card,
            ComponentTypeId::Button,
            ComponentTypeId::TextField,
            ComponentTypeId::CheckBox,
            ComponentTypeId::Slider,
            ComponentTypeId::MultipleChoice,
            ComponentTypeId::DateTimeInput,
            ComponentTypeId::Tabs,
            ComponentTypeId::Modal,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parse_round_trip() {
        for ty in ComponentTypeId::all() {
            assert_eq!(ComponentTypeId::parse(ty.name()), Some(*ty));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ComponentTypeId::parse("Chart"), None);
        assert_eq!(ComponentTypeId::parse("text"), None);
    }
}
