//! Integration test: resolve events, attributes and signatures against the
//! catalog compiled into the crate.

use evcap_core::{Registry, RegistryError};
use evcap_protocol::AttributeType;

fn registry() -> &'static Registry {
    Registry::builtin().expect("built-in catalog should load")
}

fn attribute_names(registry: &Registry, event_type: &str) -> Vec<String> {
    registry
        .resolve_attributes_by_name(event_type)
        .expect("event type should resolve")
        .into_iter()
        .map(|a| a.name)
        .collect()
}

#[test]
fn root_objects_resolve_only_their_own_events() {
    let registry = registry();
    for object in registry.catalog().objects.values() {
        if object.inherits.is_some() {
            continue;
        }
        let events = registry.resolve_events(&object.name, &[]).unwrap();
        assert_eq!(events.len(), object.events.len(), "{}", object.name);
        for (event_name, type_name) in &object.events {
            let expected = type_name.as_deref().unwrap_or("Event");
            assert_eq!(events[event_name].name, expected, "{}.{event_name}", object.name);
        }
    }
}

#[test]
fn derived_objects_include_every_ancestor_event() {
    let registry = registry();
    for name in registry.object_names() {
        let events = registry.resolve_events(name, &[]).unwrap();
        for ancestor in registry.ancestors(name).unwrap() {
            for event_name in ancestor.events.keys() {
                assert!(events.contains_key(event_name), "{name} lacks {event_name}");
            }
        }
    }
}

#[test]
fn element_and_window_event_counts() {
    let registry = registry();
    assert_eq!(registry.resolve_events("Element", &[]).unwrap().len(), 42);
    // Window redeclares `change`.
    assert_eq!(registry.resolve_events("Window", &[]).unwrap().len(), 52);
    assert_eq!(registry.resolve_events("XMLHttpRequest", &[]).unwrap().len(), 8);
}

#[test]
fn anchor_inherits_element_events() {
    let registry = registry();
    let events = registry.resolve_events("HTMLAnchorElement", &[]).unwrap();
    assert_eq!(events["click"].name, "MouseEvent");
    assert_eq!(events["mousewheel"].name, "WheelEvent");
    assert_eq!(events["keydown"].name, "KeyboardEvent");
    assert_eq!(events["scroll"].name, "Event");
}

#[test]
fn extra_event_names_map_to_default() {
    let registry = registry();
    let events = registry.resolve_events("Element", &["customEvent"]).unwrap();
    assert_eq!(events["customEvent"].name, "Event");
    assert_eq!(events["click"].name, "MouseEvent");
}

#[test]
fn unknown_object_type_errors() {
    let registry = registry();
    assert_eq!(
        registry.resolve_events("HTMLBlinkElement", &[]),
        Err(RegistryError::UnknownObjectType("HTMLBlinkElement".to_string()))
    );
}

#[test]
fn root_event_type_attributes_in_declaration_order() {
    let registry = registry();
    assert_eq!(
        attribute_names(registry, "Event"),
        ["target", "currentTarget", "timeStamp"]
    );
}

#[test]
fn derived_attributes_are_base_first_without_duplicates() {
    let registry = registry();
    for name in registry.event_type_names() {
        let attributes = attribute_names(registry, name);
        let mut unique = attributes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), attributes.len(), "{name} has duplicates");
        assert_eq!(&attributes[..3], ["target", "currentTarget", "timeStamp"]);
    }

    let wheel = attribute_names(registry, "WheelEvent");
    let pos = |n: &str| wheel.iter().position(|a| a == n).unwrap();
    assert!(pos("timeStamp") < pos("keyCode"));
    assert!(pos("which") < pos("screenX"));
    assert!(pos("y") < pos("wheelDeltaX"));
    assert_eq!(wheel.last().map(String::as_str), Some("webkitDirectionInvertedFromDevice"));
}

#[test]
fn keyboard_event_inherits_ui_event() {
    let registry = registry();
    let attributes = attribute_names(registry, "KeyboardEvent");
    assert!(attributes.contains(&"keyCode".to_string()));
    assert_eq!(attributes.last().map(String::as_str), Some("altGraphKey"));
}

#[test]
fn anchor_click_signature() {
    let registry = registry();
    let mouse = registry.event_type("MouseEvent").unwrap();
    let sig = registry
        .format_signature("HTMLAnchorElement", "click", Some(mouse), None)
        .unwrap();
    assert_eq!(
        sig,
        "HTMLAnchorElement#onclick(\
         ascii target, ascii currentTarget, uint32 timeStamp, \
         int32 keyCode, int32 charCode, int32 layerX, int32 layerY, \
         int32 pageX, int32 pageY, int32 which, \
         int32 screenX, int32 screenY, int32 clientX, int32 clientY, \
         bool ctrlKey, bool shiftKey, bool altKey, bool metaKey, \
         uint16 button, ascii relatedTarget, \
         int32 webkitMovementX, int32 webkitMovementY, \
         int32 offsetX, int32 offsetY, int32 x, int32 y)"
    );
    assert!(!sig.contains("dompath"));
}

#[test]
fn signature_keeps_dompath_in_structured_form() {
    let registry = registry();
    let focus = registry.event_type("FocusEvent").unwrap();
    let sig = registry
        .signature("Window", "focus", Some(focus), Some(":callback"))
        .unwrap();
    let related = sig.params.iter().find(|p| p.name == "relatedTarget").unwrap();
    assert_eq!(related.ty, AttributeType::DomPath);
    assert!(sig.to_string().starts_with("Window#onfocus:callback(ascii target,"));
    assert!(sig.to_string().ends_with("ascii relatedTarget)"));
}

#[test]
fn signature_without_event_type() {
    let registry = registry();
    let sig = registry
        .format_signature("Document", "webkitpointerlockchange", None, None)
        .unwrap();
    assert_eq!(sig, "Document#onwebkitpointerlockchange()");
}

#[test]
fn xhr_signatures_use_progress_attributes() {
    let registry = registry();
    let sigs = registry.signatures("XMLHttpRequest", &[], None).unwrap();
    assert_eq!(sigs.len(), 8);
    assert_eq!(sigs[0].event, "abort");
    assert_eq!(
        sigs[0].to_string(),
        "XMLHttpRequest#onabort(ascii target, ascii currentTarget, uint32 timeStamp, \
         bool lengthComputable, uint32 loaded, uint32 total, \
         uint32 position, uint32 totalSize)"
    );
}

#[test]
fn tag_names_resolve_to_elements() {
    let registry = registry();
    let name = |tag: &str| registry.object_for_tag(tag).map(|o| o.name.as_str());
    assert_eq!(name("a"), Some("HTMLAnchorElement"));
    assert_eq!(name("CANVAS"), Some("HTMLCanvasElement"));
    assert_eq!(name("div"), Some("HTMLDivElement"));
    assert_eq!(name("span"), None);
}

#[test]
fn resolution_is_idempotent() {
    let registry = registry();
    assert_eq!(
        registry.resolve_events("Window", &["custom"]).unwrap(),
        registry.resolve_events("Window", &["custom"]).unwrap()
    );
    assert_eq!(
        registry.resolve_attributes_by_name("WheelEvent").unwrap(),
        registry.resolve_attributes_by_name("WheelEvent").unwrap()
    );
    let mouse = registry.event_type("MouseEvent");
    assert_eq!(
        registry.format_signature("Element", "click", mouse, None).unwrap(),
        registry.format_signature("Element", "click", mouse, None).unwrap()
    );
}

#[test]
fn builtin_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let registry = registry();
                registry.signatures("HTMLDivElement", &[], None).unwrap().len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 42);
    }
}
