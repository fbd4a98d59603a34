use pattern_catalog::patterns::creational::{abstract_factory, factory, prototype};
use pattern_catalog::patterns::structural::flyweight;
use pattern_catalog::Transcript;
use std::rc::Rc;

/// 所有選擇器：已知標籤不分大小寫，未知標籤回傳 None
#[test]
fn test_shape_selectors_ignore_case() {
    let direct = factory::ShapeFactory;
    let via_producer = abstract_factory::FactoryProducer::get_factory("ShApE").unwrap();

    for label in ["circle", "CIRCLE", "Circle"] {
        assert_eq!(direct.get_shape(label).unwrap().kind(), "Circle");
        assert_eq!(via_producer.get_shape(label).unwrap().kind(), "Circle");
    }
}

#[test]
fn test_color_selector_ignores_case() {
    let colors = abstract_factory::FactoryProducer::get_factory("color").unwrap();
    for (label, kind) in [("red", "Red"), ("GREEN", "Green"), ("Blue", "Blue")] {
        assert_eq!(colors.get_color(label).unwrap().kind(), kind);
    }
}

#[test]
fn test_unrecognized_labels_are_empty() {
    assert!(factory::ShapeFactory.get_shape("pentagon").is_none());
    assert!(abstract_factory::FactoryProducer::get_factory("sound").is_none());

    let colors = abstract_factory::FactoryProducer::get_factory("COLOR").unwrap();
    assert!(colors.get_color("magenta").is_none());

    let mut cache = prototype::ShapeCache::new();
    cache.load_cache();
    assert!(cache.get_shape("circle").is_none());
}

#[test]
fn test_flyweight_identity() {
    let mut shapes = flyweight::ShapeFactory::new();
    let mut out = Transcript::new();

    let a = shapes.get_circle("Black", &mut out);
    let b = shapes.get_circle("Black", &mut out);
    let c = shapes.get_circle("White", &mut out);

    assert!(Rc::ptr_eq(&a, &b));
    assert!(!Rc::ptr_eq(&a, &c));
    assert_eq!(
        out.lines(),
        &[
            "Creating circle of color : Black",
            "Creating circle of color : White",
        ]
    );
}
