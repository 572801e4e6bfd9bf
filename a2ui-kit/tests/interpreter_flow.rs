//! End-to-end interpreter scenarios over the JSON wire format.

use a2ui_kit::{
    MessageProcessor, ProcessorEvent, ProtocolError, TextRole, VisualNode, render_surface,
};

#[test]
fn greeting_surface_renders_heading() {
    let mut processor = MessageProcessor::new();

    processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"updateDataModel": {"surfaceId": "main", "path": "/", "value": {"name": "Ann"}}},
                {"updateComponents": {"surfaceId": "main", "components": [
                    {"id": "root", "type": "Text", "text": {"path": "/name"}, "usageHint": "h1"}
                ]}}
            ]"#,
        )
        .unwrap();

    assert_eq!(
        processor.render_surface("main"),
        VisualNode::Text {
            content: "Ann".to_string(),
            role: TextRole::H1,
        }
    );
}

#[test]
fn product_list_expands_template_in_order() {
    let mut processor = MessageProcessor::new();

    processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "shop", "catalogId": "standard"}},
                {"updateDataModel": {"surfaceId": "shop", "value": {
                    "products": [
                        {"name": "Headphones", "price": 79},
                        {"name": "Keyboard", "price": 129}
                    ]
                }}},
                {"updateComponents": {"surfaceId": "shop", "components": [
                    {"id": "root", "type": "List", "children":
                        {"template": {"componentId": "product", "dataBinding": "/products"}}},
                    {"id": "product", "type": "Column", "children":
                        {"explicitList": ["product-name", "product-price"]}},
                    {"id": "product-name", "type": "Text", "text": {"path": "./name"}, "usageHint": "h3"},
                    {"id": "product-price", "type": "Text", "text": {"path": "./price"}, "usageHint": "caption"}
                ]}}
            ]"#,
        )
        .unwrap();

    let VisualNode::Stack {
        children,
        scrollable,
        ..
    } = processor.render_surface("shop")
    else {
        panic!("expected Stack root");
    };
    assert!(scrollable);
    assert_eq!(children.len(), 2);

    let texts: Vec<Vec<String>> = children
        .iter()
        .map(|item| {
            let VisualNode::Stack { children, .. } = item else {
                panic!("expected Stack item");
            };
            children
                .iter()
                .map(|child| match child {
                    VisualNode::Text { content, .. } => content.clone(),
                    other => panic!("expected Text, got {other:?}"),
                })
                .collect()
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            vec!["Headphones".to_string(), "79".to_string()],
            vec!["Keyboard".to_string(), "129".to_string()],
        ]
    );
}

#[test]
fn literal_beats_path_even_when_path_resolves() {
    let mut processor = MessageProcessor::new();

    processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"updateDataModel": {"surfaceId": "main", "value": {"b": "from-model"}}},
                {"updateComponents": {"surfaceId": "main", "components": [
                    {"id": "root", "type": "Text",
                     "text": {"literalString": "A", "path": "/b"}}
                ]}}
            ]"#,
        )
        .unwrap();

    assert_eq!(
        processor.render_surface("main"),
        VisualNode::Text {
            content: "A".to_string(),
            role: TextRole::Body,
        }
    );
}

#[test]
fn subtree_update_leaves_siblings_untouched() {
    let mut processor = MessageProcessor::new();

    processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"updateDataModel": {"surfaceId": "main", "value": {"a": 1, "b": {"c": 2}}}},
                {"updateDataModel": {"surfaceId": "main", "path": "/b/c", "value": 3}}
            ]"#,
        )
        .unwrap();

    let store = processor.store();
    let model = store.get("main").unwrap().data_model();
    assert_eq!(model.get_number("/a"), Some(1.0));
    assert_eq!(model.get_number("/b/c"), Some(3.0));

    // Root replace discards prior keys.
    processor
        .apply_json(r#"[{"updateDataModel": {"surfaceId": "main", "path": "/", "value": {"z": 9}}}]"#)
        .unwrap();
    let model = processor.store().get("main").unwrap().data_model();
    assert_eq!(model.get("/a"), None);
    assert_eq!(model.get_number("/z"), Some(9.0));
}

#[test]
fn deleted_surface_renders_empty_and_ignores_updates() {
    let mut processor = MessageProcessor::new();

    processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"updateComponents": {"surfaceId": "main", "components": [
                    {"id": "root", "type": "Divider"}
                ]}},
                {"deleteSurface": {"surfaceId": "main"}}
            ]"#,
        )
        .unwrap();

    assert_eq!(processor.render_surface("main"), VisualNode::Empty);

    // Updates targeting the deleted surface are no-ops.
    let events = processor
        .apply_json(
            r#"[{"updateComponents": {"surfaceId": "main", "components": [
                {"id": "root", "type": "Divider"}
            ]}}]"#,
        )
        .unwrap();
    assert!(events.is_empty());
    assert_eq!(processor.render_surface("main"), VisualNode::Empty);
}

#[test]
fn unknown_component_type_renders_placeholder() {
    let mut processor = MessageProcessor::new();

    processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"updateComponents": {"surfaceId": "main", "components": [
                    {"id": "root", "type": "Column", "children": {"explicitList": ["mystery"]}},
                    {"id": "mystery", "type": "HoloDeck", "warp": 9}
                ]}}
            ]"#,
        )
        .unwrap();

    let VisualNode::Stack { children, .. } = processor.render_surface("main") else {
        panic!("expected Stack root");
    };
    assert_eq!(
        children,
        vec![VisualNode::Placeholder {
            type_name: "HoloDeck".to_string()
        }]
    );
}

#[test]
fn unrecognized_message_kind_rejects_batch_atomically() {
    let mut processor = MessageProcessor::new();

    let err = processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"transmogrify": {"surfaceId": "main"}}
            ]"#,
        )
        .unwrap_err();

    assert!(matches!(err, ProtocolError::UnknownMessageKind { index: 1 }));
    // The well-formed first element must not have been applied.
    assert!(processor.store().is_empty());
}

#[test]
fn renders_are_identical_across_calls() {
    let mut processor = MessageProcessor::new();

    processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"updateDataModel": {"surfaceId": "main", "value": {"agree": true, "volume": 30}}},
                {"updateComponents": {"surfaceId": "main", "components": [
                    {"id": "root", "type": "Column", "children": {"explicitList": ["check", "vol", "pic"]}},
                    {"id": "check", "type": "CheckBox",
                     "label": {"literalString": "Agree"}, "value": {"path": "/agree"}},
                    {"id": "vol", "type": "Slider", "value": {"path": "/volume"}, "maxValue": 60},
                    {"id": "pic", "type": "Image", "url": {"literalString": "https://x/y.png"}, "fit": "contain"}
                ]}}
            ]"#,
        )
        .unwrap();

    let first = processor.render_surface("main");
    let second = processor.render_surface("main");
    assert_eq!(first, second);

    // Free-function entry point sees the same tree.
    assert_eq!(render_surface(processor.store(), "main"), first);
}

#[test]
fn events_report_batch_effects() {
    let mut processor = MessageProcessor::new();

    let events = processor
        .apply_json(
            r#"[
                {"createSurface": {"surfaceId": "main", "catalogId": "standard"}},
                {"updateComponents": {"surfaceId": "main", "components": [
                    {"id": "root", "type": "Divider"}
                ]}},
                {"updateDataModel": {"surfaceId": "main", "path": "/x", "value": 1}}
            ]"#,
        )
        .unwrap();

    assert_eq!(
        events,
        vec![
            ProcessorEvent::SurfaceCreated {
                surface_id: "main".to_string()
            },
            ProcessorEvent::ComponentsUpdated {
                surface_id: "main".to_string(),
                component_ids: vec!["root".to_string()],
            },
            ProcessorEvent::DataModelUpdated {
                surface_id: "main".to_string(),
                path: "/x".to_string(),
            },
        ]
    );
}
