use resellerclub::api::Query;

fn pairs(q: &Query) -> Vec<(&str, &str)> {
    q.pairs().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

#[test]
fn set_replaces_and_add_repeats() {
    let mut q = Query::new();
    q.add("tlds", "com")
        .add("tlds", "net")
        .set("years", 1)
        .set("years", 2);

    assert_eq!(pairs(&q), vec![("tlds", "com"), ("tlds", "net"), ("years", "2")]);

    q.set("tlds", "org");
    assert_eq!(pairs(&q), vec![("years", "2"), ("tlds", "org")]);
}

#[test]
fn add_all_keeps_order() {
    let mut q = Query::new();
    q.add_all("ns", ["ns1.example.net", "ns2.example.net"]).add_all("order-id", [7i64, 9]);

    assert_eq!(
        pairs(&q),
        vec![
            ("ns", "ns1.example.net"),
            ("ns", "ns2.example.net"),
            ("order-id", "7"),
            ("order-id", "9"),
        ]
    );
}

#[test]
fn conditional_setters_skip_empty_and_false() {
    let mut q = Query::new();
    q.set_non_empty("vat-id", "")
        .set_non_empty("fax", "5551234")
        .set_flag("sms-consent", false)
        .set_flag("accept-policy", true);

    assert_eq!(pairs(&q), vec![("fax", "5551234"), ("accept-policy", "true")]);
}
