use super::*;

#[test]
fn test_class_declaration_and_reference() {
    let plain = YumlClass::new("Engine");
    assert_eq!(plain.declaration(), "[Engine]");
    assert_eq!(plain.reference(), "[Engine]");

    let noted = YumlClass::new("App").with_note("C#").with_note(".Net Version: v4.8");
    assert_eq!(noted.declaration(), "[App|C#;.Net Version: v4.8;]");
    assert_eq!(noted.reference(), "[App]");
}

#[test]
fn test_names_are_stripped_of_yuml_syntax() {
    let class = YumlClass::new("odd[name]|x;y").with_note("a,b");
    assert_eq!(class.declaration(), "[odd(name) x y|a b;]");
}

#[test]
fn test_association_renders_arrow() {
    let association = Association {
        parent: YumlClass::new("App").with_note("C#"),
        child: YumlClass::new("Core"),
    };
    assert_eq!(association.to_string(), "[App]->[Core]");
}

#[test]
fn test_diagram_deduplicates_and_sorts() {
    let app = YumlClass::new("App").with_note("C#");
    let core = YumlClass::new("Core");
    let util = YumlClass::new("Util");

    let mut diagram = YumlDiagram::new();
    diagram.associate(Association { parent: app.clone(), child: util.clone() });
    diagram.associate(Association { parent: app.clone(), child: core.clone() });
    diagram.associate(Association { parent: app, child: core });

    assert_eq!(diagram.relationship_count(), 2);
    assert_eq!(
        diagram.relationships().collect::<Vec<_>>(),
        vec!["[App]->[Core]", "[App]->[Util]"]
    );
    assert_eq!(
        diagram.to_multiline(),
        "// Declarations\n[App|C#;]\n[Core]\n[Util]\n\n// Relationships\n[App]->[Core]\n[App]->[Util]\n"
    );
    assert_eq!(diagram.to_dsl(), "[App|C#;],[Core],[Util],[App]->[Core],[App]->[Util]");
}

#[test]
fn test_empty_diagram() {
    let diagram = YumlDiagram::new();
    assert!(diagram.is_empty());
    assert_eq!(diagram.to_dsl(), "");
}
