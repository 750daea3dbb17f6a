use schema_ir::combinators::{boolean, extend, keyof, number, omit, pick, property, string, struct_};
use schema_ir::value::Key;

fn person() -> schema_ir::ast::Ast {
    struct_(
        vec![property("name", string()), property("age", number()), property("active", boolean())],
        vec![],
    )
    .unwrap()
}

// §8 property 5: pick(struct(F), ks) ≡ struct(F | ks); omit/pick partition.
#[test]
fn pick_and_omit_partition_the_struct() {
    let p = person();
    let keys = vec![Key::from("name")];

    let picked = pick(&p, &keys).unwrap();
    let omitted = omit(&p, &keys).unwrap();

    let picked_keys = keyof(&picked);
    let omitted_keys = keyof(&omitted);
    assert_ne!(picked_keys, omitted_keys);

    let recombined = extend(&picked, &omitted).unwrap();
    assert_eq!(keyof(&recombined), keyof(&p));
}

#[test]
fn pick_matches_struct_built_from_the_same_subset() {
    let p = person();
    let picked = pick(&p, &[Key::from("name")]).unwrap();
    let expected = struct_(vec![property("name", string())], vec![]).unwrap();
    assert_eq!(picked, expected);
}

#[test]
fn extend_rejects_conflicting_property_signatures() {
    let a = struct_(vec![property("x", string())], vec![]).unwrap();
    let b = struct_(vec![property("x", number())], vec![]).unwrap();
    assert!(extend(&a, &b).is_err());
}

#[test]
fn extend_allows_identical_overlapping_signatures() {
    let a = struct_(vec![property("x", string()), property("y", number())], vec![]).unwrap();
    let b = struct_(vec![property("x", string()), property("z", boolean())], vec![]).unwrap();
    let extended = extend(&a, &b).unwrap();
    assert_eq!(keyof(&extended), keyof(&struct_(vec![property("x", string()), property("y", number()), property("z", boolean())], vec![]).unwrap()));
}

#[test]
fn keyof_on_non_struct_is_never() {
    use schema_ir::combinators::never;
    assert_eq!(keyof(&string()), never());
}
