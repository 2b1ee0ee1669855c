use std::collections::{BTreeMap, HashMap};

use dotpath::{record, Dot, DotError, Queue};

#[derive(Debug, Default)]
struct Part {
    slug: String,
    count: i32,
    user: HashMap<String, String>,
}

#[derive(Debug, Default)]
struct Info {
    title: String,
    pages: HashMap<String, f64>,
    pipe: Queue<Part>,
}

#[derive(Debug, Default)]
struct Data {
    more: Info,
    a: HashMap<String, Info>,
    b: HashMap<String, String>,
    c: HashMap<String, HashMap<String, i32>>,
    d: HashMap<String, HashMap<String, Info>>,
    e: Vec<i32>,
    f: Vec<Info>,
    g: [i32; 3],
    j: [Info; 3],
}

#[derive(Debug, Default)]
struct Extra {
    opt: Option<Vec<i32>>,
    maybe: Option<i32>,
    lazy: Option<HashMap<String, i32>>,
    boxed: Box<Info>,
    tree: BTreeMap<i64, String>,
}

record!(Part { slug, count, user });
record!(Info { title, pages, pipe });
record!(Data { more, a, b, c, d, e, f, g, j });
record!(Extra { opt, maybe, lazy, boxed, tree });

#[test]
fn insert_into_struct_fields() {
    let mut data = Data::default();
    let mut dot = Dot::new(&mut data);

    dot.insert("more.title", "Title from More".to_string()).unwrap();
    assert_eq!(dot.get().more.title, "Title from More");

    dot.insert("more.pages.total", 100.0_f64).unwrap();
    assert_eq!(dot.get().more.pages["total"], 100.0);

    let err = dot.insert("more.title.unknown", "x".to_string()).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: more.title.unknown");

    let err = dot.insert("nope", 1).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: nope");
}

#[test]
fn insert_into_fixed_array() {
    let mut data = Data::default();
    let mut dot = Dot::new(&mut data);

    dot.insert("g.1", 5).unwrap();
    assert_eq!(dot.get().g, [0, 5, 0]);

    dot.insert("g", [1, 2, 3]).unwrap();
    assert_eq!(dot.get().g, [1, 2, 3]);

    dot.insert("g.0", 0).unwrap();
    assert_eq!(dot.get().g, [0, 2, 3]);

    let err = dot.insert("g.0.field", 0).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: g.0.field");

    let err = dot.insert("g.3", 0).unwrap_err();
    assert_eq!(err.to_string(), "index 3 out of range in path g.3 of type [i32; 3]");

    let err = dot.insert("g.-1", 0).unwrap_err();
    assert_eq!(err.to_string(), "index -1 out of range in path g.-1 of type [i32; 3]");

    let err = dot.insert("g.a", 0).unwrap_err();
    assert_eq!(err.to_string(), "invalid value \"a\" as an array index");

    dot.insert("j.1.title", "Array Title".to_string()).unwrap();
    let titles: Vec<&str> = dot.get().j.iter().map(|info| info.title.as_str()).collect();
    assert_eq!(titles, ["", "Array Title", ""]);
}

#[test]
fn fixed_array_element_is_replaced_whole() {
    let mut data = Data::default();
    data.j[1].title = "Old Title".to_string();
    data.j[1].pages.insert("total".to_string(), 10.0);
    let mut dot = Dot::new(&mut data);

    dot.insert("j.1.title", "New Title".to_string()).unwrap();
    assert_eq!(dot.get().j[1].title, "New Title");
    assert!(dot.get().j[1].pages.is_empty());
}

#[test]
fn fixed_array_bounds() {
    let mut g = [0_u8; 4];
    let mut dot = Dot::new(&mut g);

    for index in 0..4 {
        dot.insert(&index.to_string(), 7_u8).unwrap();
    }
    assert_eq!(dot.get(), &[7_u8; 4]);

    for path in ["4", "-1"] {
        let err = dot.insert(path, 1_u8).unwrap_err();
        assert!(matches!(err, DotError::IndexOutOfRange { .. }), "{path}: {err}");
    }
}

#[test]
fn insert_into_sequence() {
    let mut data = Data::default();
    let mut dot = Dot::new(&mut data);

    dot.insert("e", vec![1, 2]).unwrap();
    assert_eq!(dot.get().e, [1, 2]);

    dot.insert("e.-1", 3).unwrap();
    assert_eq!(dot.get().e, [1, 2, 3]);

    dot.insert("e.0", 0).unwrap();
    assert_eq!(dot.get().e, [0, 2, 3]);

    let err = dot.insert("e.0.field", 4).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: e.0.field");

    let err = dot.insert("e.4", 4).unwrap_err();
    assert_eq!(err.to_string(), "index 4 out of range in path e.4");

    let err = dot.insert("e.-2", 4).unwrap_err();
    assert!(matches!(err, DotError::IndexOutOfRange { index: -2, .. }));
    assert_eq!(dot.get().e, [0, 2, 3]);

    let err = dot.insert("e.a", 0).unwrap_err();
    assert_eq!(err.to_string(), "invalid value \"a\" as a sequence index");
}

#[test]
fn sequence_of_records() {
    let mut data = Data::default();
    let mut dot = Dot::new(&mut data);

    dot.insert("f.-1.title", "F-First".to_string()).unwrap();

    let err = dot.insert("f.-1.field", "Value".to_string()).unwrap_err();
    assert!(err.to_string().contains("f.-1.field"));
    assert_eq!(dot.get().f.len(), 1);

    dot.insert("f.-1.title", "F-Second".to_string()).unwrap();
    assert_eq!(dot.get().f.len(), 2);
    assert_eq!(dot.get().f[1].title, "F-Second");

    dot.insert("f.0.title", "F-New".to_string()).unwrap();
    assert_eq!(dot.get().f.len(), 2);
    assert_eq!(dot.get().f[0].title, "F-New");
    assert_eq!(dot.get().f[1].title, "F-Second");
}

#[test]
fn sequence_element_is_updated_in_place() {
    let mut data = Data::default();
    let mut first = Info {
        title: "Old Title".to_string(),
        ..Info::default()
    };
    first.pages.insert("total".to_string(), 10.0);
    data.f.push(first);
    let mut dot = Dot::new(&mut data);

    dot.insert("f.0.title", "New Title".to_string()).unwrap();
    assert_eq!(dot.get().f[0].title, "New Title");
    assert_eq!(dot.get().f[0].pages["total"], 10.0);
}

#[test]
fn append_is_not_idempotent() {
    let mut e: Vec<i32> = Vec::new();
    let mut dot = Dot::new(&mut e);

    dot.insert("-1", 3).unwrap();
    assert_eq!(dot.get(), &[3]);
    dot.insert("-1", 4).unwrap();
    assert_eq!(dot.get(), &[3, 4]);
}

#[test]
fn insert_into_maps() {
    let mut data = Data::default();
    let mut dot = Dot::new(&mut data);

    dot.insert("a.first.title", "Title from map".to_string()).unwrap();
    assert_eq!(dot.get().a["first"].title, "Title from map");

    dot.insert("c.first.second", 55).unwrap();
    assert_eq!(dot.get().c["first"]["second"], 55);

    dot.insert("c.first.second", 100).unwrap();
    assert_eq!(dot.get().c["first"]["second"], 100);
    assert_eq!(dot.get().c.len(), 1);
    assert_eq!(dot.get().c["first"].len(), 1);

    let err = dot.insert("c.first.second.third", 55).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: c.first.second.third");

    dot.insert("d.first.second.title", "Title from Map".to_string()).unwrap();
    assert_eq!(dot.get().d["first"]["second"].title, "Title from Map");

    let err = dot.insert("d.first.second.field", 55).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: d.first.second.field");

    let err = dot.insert("a.first.title1", "x".to_string()).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: a.first.title1");
}

#[test]
fn map_values_are_replaced_whole() {
    let mut data = Data::default();
    let mut dot = Dot::new(&mut data);

    dot.insert("c.a.x", 1).unwrap();
    dot.insert("c.a.y", 2).unwrap();

    let inner = &dot.get().c["a"];
    assert_eq!(inner.get("y"), Some(&2));
    assert_eq!(inner.get("x"), None);
}

#[test]
fn type_mismatch_messages() {
    let mut data = Data::default();
    let mut dot = Dot::new(&mut data);

    let err = dot.insert("g.0", 15.5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "a i32 type array cannot contain a f64 type value in path g.0"
    );

    let err = dot.insert("f.-1", 100).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("a sequence of type "), "{msg}");
    assert!(msg.ends_with("Info cannot contain a value of type i32 in path f.-1"), "{msg}");

    let err = dot.insert("b.key", 55).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("the map value is of type "), "{msg}");
    assert!(msg.ends_with("String and cannot contain a value of type i32 in path b.key"), "{msg}");

    let err = dot.insert("more", -1).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("type "), "{msg}");
    assert!(msg.ends_with("Info cannot contain a value of type i32 in path more"), "{msg}");

    assert!(dot.get().f.is_empty());
    assert!(dot.get().b.is_empty());
}

#[test]
fn insert_into_primitive_roots() {
    let mut a = String::new();
    Dot::new(&mut a).insert("", "value".to_string()).unwrap();
    assert_eq!(a, "value");

    let mut info: HashMap<String, String> = HashMap::new();
    Dot::new(&mut info).insert("key", "value".to_string()).unwrap();
    assert_eq!(info["key"], "value");

    let mut list: Vec<String> = Vec::new();
    Dot::new(&mut list).insert("-1", "value".to_string()).unwrap();
    assert_eq!(list[0], "value");
}

#[test]
fn lazy_wrappers_materialize() {
    let mut extra = Extra::default();
    let mut dot = Dot::new(&mut extra);

    dot.insert("opt.-1", 7).unwrap();
    assert_eq!(dot.get().opt, Some(vec![7]));

    dot.insert("boxed.title", "boxed".to_string()).unwrap();
    assert_eq!(dot.get().boxed.title, "boxed");

    dot.insert("tree.-5", "minus five".to_string()).unwrap();
    assert_eq!(dot.get().tree[&-5], "minus five");

    let err = dot.insert("lazy.k.deeper", 1).unwrap_err();
    assert!(err.is_unknown_path());
    assert_eq!(dot.get().lazy, Some(HashMap::new()));
}

#[test]
fn failed_insert_leaves_absent_wrappers_empty() {
    let mut extra = Extra::default();
    let mut dot = Dot::new(&mut extra);

    let err = dot.insert("maybe.more", 1_i32).unwrap_err();
    assert_eq!(err.to_string(), "unknown path: maybe.more");
    assert_eq!(dot.get().maybe, None);

    let err = dot.insert("opt", 5_i32).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(dot.get().opt, None);

    dot.insert("maybe", Some(4_i32)).unwrap();
    assert_eq!(dot.get().maybe, Some(4));

    let err = dot.insert("maybe.more", 1_i32).unwrap_err();
    assert!(err.is_unknown_path());
    assert_eq!(dot.get().maybe, Some(4));
}
