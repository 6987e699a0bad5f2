use omeka2rdf::emitter::ntriples::NTriplesEmitter;
use omeka2rdf::emitter::turtle::TurtleEmitter;
use omeka2rdf::emitter::TriplesEmitter;
use omeka2rdf::{Graph, NamespaceTable, Triple};

// ---------------------------------------------------------------------------
// NTriples tests
// ---------------------------------------------------------------------------

#[test]
fn nt_basic_iri_triple() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
    );
}

#[test]
fn nt_literal_triple() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_literal(
        "http://example.org/s",
        "http://www.w3.org/2000/01/rdf-schema#label",
        "Letter from Paris",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(
        out,
        "<http://example.org/s> <http://www.w3.org/2000/01/rdf-schema#label> \"Letter from Paris\" .\n"
    );
}

#[test]
fn nt_escape_special_chars() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_literal(
        "http://example.org/s",
        "http://example.org/p",
        "line1\nline2\ttab\\slash\"quote",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("line1\\nline2\\ttab\\\\slash\\\"quote"), "{out}");
    assert_eq!(out.lines().count(), 1, "newline must not split the statement");
}

#[test]
fn nt_escape_control_chars() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_literal("http://example.org/s", "http://example.org/p", "a\x01b")
        .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\\u0001"), "Expected \\u0001 in: {out}");
}

#[test]
fn nt_escape_unicode_passthrough() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_literal(
        "http://example.org/s",
        "http://example.org/p",
        "Lettre de Montréal",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("Montréal"), "Unicode should pass through: {out}");
}

#[test]
fn nt_iri_with_space_is_percent_encoded() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.emit_iri(
        "http://example.org/items/1",
        "http://xmlns.com/foaf/0.1/depiction",
        "http://example.org/files/front page.jpg",
    )
    .unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert!(
        out.contains("<http://example.org/files/front%20page.jpg>"),
        "{out}"
    );
}

#[test]
fn nt_prefix_as_comment() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    em.add_prefix("dcterms", "http://purl.org/dc/terms/").unwrap();
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "# @prefix dcterms: <http://purl.org/dc/terms/> .\n");
}

#[test]
fn nt_triple_count() {
    let mut buf = Vec::new();
    let mut em = NTriplesEmitter::new(&mut buf);
    assert_eq!(em.triple_count(), 0);
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    assert_eq!(em.triple_count(), 1);
    em.emit_literal("http://example.org/s", "http://example.org/p", "val")
        .unwrap();
    assert_eq!(em.triple_count(), 2);
    em.add_prefix("ex", "http://example.org/").unwrap();
    assert_eq!(em.triple_count(), 2, "prefixes are not triples");
}

// ---------------------------------------------------------------------------
// Turtle tests
// ---------------------------------------------------------------------------

fn turtle(prefixes: &[(&str, &str)], emit: impl FnOnce(&mut TurtleEmitter<&mut Vec<u8>>)) -> String {
    let mut buf = Vec::new();
    {
        let mut em = TurtleEmitter::new(&mut buf);
        for (prefix, iri) in prefixes {
            em.add_prefix(prefix, iri).unwrap();
        }
        emit(&mut em);
        em.flush().unwrap();
    }
    String::from_utf8(buf).unwrap()
}

#[test]
fn turtle_basic_iri_with_prefix() {
    let out = turtle(&[("ex", "http://example.org/")], |em| {
        em.emit_iri(
            "http://example.org/s",
            "http://example.org/p",
            "http://example.org/o",
        )
        .unwrap();
    });
    assert!(out.contains("@prefix ex: <http://example.org/> ."));
    assert!(out.contains("ex:s ex:p ex:o ."), "{out}");
}

#[test]
fn turtle_literal_with_prefix() {
    let out = turtle(&[("ex", "http://example.org/")], |em| {
        em.emit_literal("http://example.org/s", "http://example.org/name", "Alice")
            .unwrap();
    });
    assert!(
        out.contains("ex:s ex:name \"Alice\" ."),
        "Expected compacted form: {out}"
    );
}

#[test]
fn turtle_groups_statements_by_subject() {
    let out = turtle(
        &[
            ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
            ("o", "http://omeka.org/s/vocabs/o#"),
        ],
        |em| {
            em.emit_literal(
                "http://example.org/items/1",
                "http://www.w3.org/2000/01/rdf-schema#label",
                "Doc",
            )
            .unwrap();
            em.emit_iri(
                "http://example.org/items/1",
                "http://omeka.org/s/vocabs/o#item_set",
                "http://example.org/item_sets/2",
            )
            .unwrap();
            em.emit_literal(
                "http://example.org/items/3",
                "http://www.w3.org/2000/01/rdf-schema#label",
                "Other",
            )
            .unwrap();
        },
    );
    let expected = "<http://example.org/items/1> rdfs:label \"Doc\" ;\n    \
                    o:item_set <http://example.org/item_sets/2> .\n\
                    <http://example.org/items/3> rdfs:label \"Other\" .\n";
    assert!(out.ends_with(expected), "{out}");
}

#[test]
fn turtle_hyphenated_prefix_compacts() {
    let out = turtle(&[("o-cnt", "http://www.w3.org/2011/content#")], |em| {
        em.emit_literal(
            "http://example.org/media/6",
            "http://www.w3.org/2011/content#chars",
            "text",
        )
        .unwrap();
    });
    assert!(out.contains("o-cnt:chars \"text\""), "{out}");
}

#[test]
fn turtle_longest_namespace_wins() {
    let out = turtle(
        &[("ex", "http://example.org/"), ("exv", "http://example.org/vocab/")],
        |em| {
            em.emit_iri(
                "http://example.org/s",
                "http://example.org/vocab/p",
                "http://example.org/o",
            )
            .unwrap();
        },
    );
    assert!(out.contains("ex:s exv:p ex:o ."), "{out}");
}

#[test]
fn turtle_prefix_declaration_sorted() {
    let out = turtle(
        &[("z", "http://z.org/"), ("a", "http://a.org/"), ("m", "http://m.org/")],
        |em| {
            em.emit_iri("http://a.org/s", "http://m.org/p", "http://z.org/o")
                .unwrap();
        },
    );
    let a_pos = out.find("@prefix a:").expect("missing @prefix a:");
    let m_pos = out.find("@prefix m:").expect("missing @prefix m:");
    let z_pos = out.find("@prefix z:").expect("missing @prefix z:");
    assert!(
        a_pos < m_pos && m_pos < z_pos,
        "Prefixes not sorted: a@{a_pos} m@{m_pos} z@{z_pos}"
    );
}

#[test]
fn turtle_prefixes_written_for_empty_graph() {
    let out = turtle(&[("ex", "http://example.org/")], |_| {});
    assert_eq!(out, "@prefix ex: <http://example.org/> .\n\n");
}

#[test]
fn turtle_escape_special_chars() {
    let out = turtle(&[], |em| {
        em.emit_literal(
            "http://example.org/s",
            "http://example.org/p",
            "line\n\"end\\",
        )
        .unwrap();
    });
    assert!(out.contains("\\n"), "Expected escaped newline: {out}");
    assert!(out.contains("\\\""), "Expected escaped quote: {out}");
    assert!(out.contains("\\\\"), "Expected escaped backslash: {out}");
}

#[test]
fn turtle_no_prefix_uses_full_iri() {
    let out = turtle(&[], |em| {
        em.emit_iri(
            "http://example.org/s",
            "http://example.org/p",
            "http://example.org/o",
        )
        .unwrap();
    });
    assert_eq!(
        out,
        "<http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
    );
}

#[test]
fn turtle_local_name_with_special_chars_not_compacted() {
    let out = turtle(&[("ex", "http://example.org/")], |em| {
        em.emit_iri(
            "http://example.org/foo.bar",
            "http://example.org/p",
            "http://example.org/items/1",
        )
        .unwrap();
    });
    assert!(
        out.contains("<http://example.org/foo.bar>"),
        "IRI with '.' should not compact: {out}"
    );
    assert!(
        out.contains("<http://example.org/items/1>"),
        "IRI with '/' should not compact: {out}"
    );
}

#[test]
fn turtle_triple_count() {
    let mut buf = Vec::new();
    let mut em = TurtleEmitter::new(&mut buf);
    assert_eq!(em.triple_count(), 0);
    em.emit_iri(
        "http://example.org/s",
        "http://example.org/p",
        "http://example.org/o",
    )
    .unwrap();
    em.emit_literal("http://example.org/s", "http://example.org/p", "v")
        .unwrap();
    assert_eq!(em.triple_count(), 2);
    assert!(em.flush().is_ok());
}

#[test]
fn turtle_non_ascii_local_name_not_compacted() {
    let out = turtle(&[("ex", "http://example.org/")], |em| {
        em.emit_iri("http://example.org/s", "http://example.org/p", "http://example.org/aª")
            .unwrap();
        em.emit_iri("http://example.org/s", "http://example.org/p", "http://example.org/x²")
            .unwrap();
    });
    assert!(out.contains("<http://example.org/aª>"), "{out}");
    assert!(out.contains("<http://example.org/x²>"), "{out}");
    assert!(!out.contains("ex:aª"), "{out}");
}

// ---------------------------------------------------------------------------
// Both formats
// ---------------------------------------------------------------------------

#[test]
fn non_ascii_iris_are_identical_in_both_formats() {
    let namespaces = NamespaceTable::empty()
        .with("dcterms", "http://purl.org/dc/terms/")
        .with("frdb", "http://fr.dbpedia.org/resource/");
    let mut graph = Graph::new(&namespaces);
    graph.add(Triple::iri(
        "http://x/items/1",
        "http://purl.org/dc/terms/spatial",
        "http://fr.dbpedia.org/resource/Réunion",
    ));
    graph.add(Triple::iri(
        "http://x/items/1",
        "http://purl.org/dc/terms/relation",
        "http://other.org/Café",
    ));

    let mut nt = Vec::new();
    graph.write_to(&mut NTriplesEmitter::new(&mut nt)).unwrap();
    let nt = String::from_utf8(nt).unwrap();
    let mut ttl = Vec::new();
    graph.write_to(&mut TurtleEmitter::new(&mut ttl)).unwrap();
    let ttl = String::from_utf8(ttl).unwrap();

    for iri in ["<http://fr.dbpedia.org/resource/Réunion>", "<http://other.org/Café>"] {
        assert!(nt.contains(iri), "{iri} missing from N-Triples:\n{nt}");
        assert!(ttl.contains(iri), "{iri} missing from Turtle:\n{ttl}");
    }
    assert!(!nt.contains("%C3%A9"), "{nt}");
    assert!(!ttl.contains("%C3%A9"), "{ttl}");
}
