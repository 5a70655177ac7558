//! End-to-end synthesis over introspection documents shaped like real
//! server responses.

use gqlurl_introspect::IntrospectionResponse;
use gqlurl_synth::{
    decode_query_component, root_operations, synthesize, PlaceholderStyle, SynthesisOptions,
};
use serde_json::{json, Value};

const BASE: &str = "https://api.example.com/graphql";

fn response(types: Value) -> IntrospectionResponse {
    serde_json::from_value(json!({
        "data": {
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": { "name": "Mutation" },
                "subscriptionType": null,
                "types": types,
                "directives": []
            }
        }
    }))
    .unwrap()
}

fn scalar_ref(name: &str) -> Value {
    json!({ "kind": "SCALAR", "name": name, "ofType": null })
}

fn non_null(inner: Value) -> Value {
    json!({ "kind": "NON_NULL", "name": null, "ofType": inner })
}

fn field(name: &str, args: Value, type_ref: Value) -> Value {
    json!({
        "name": name,
        "description": null,
        "args": args,
        "type": type_ref,
        "isDeprecated": false,
        "deprecationReason": null
    })
}

fn arg(name: &str, type_ref: Value) -> Value {
    json!({ "name": name, "description": null, "type": type_ref, "defaultValue": null })
}

fn object(name: &str, fields: Value) -> Value {
    json!({
        "kind": "OBJECT",
        "name": name,
        "description": null,
        "fields": fields,
        "inputFields": null,
        "interfaces": [],
        "enumValues": null,
        "possibleTypes": null
    })
}

fn query_component(url: &str) -> &str {
    url.split_once("?query=").map(|(_, query)| query).unwrap()
}

#[test]
fn test_query_only_schema_preserves_field_order() {
    let doc = response(json!([
        object(
            "Query",
            json!([
                field("zeta", json!([]), scalar_ref("String")),
                field("alpha", json!([]), scalar_ref("Int")),
                field("mid", json!([]), scalar_ref("Boolean")),
            ])
        ),
        { "kind": "SCALAR", "name": "String", "fields": null },
    ]));

    let urls = synthesize(&doc, BASE, SynthesisOptions::default());

    assert_eq!(urls.queries.len(), 3);
    assert!(urls.mutations.is_empty());
    let bodies: Vec<_> = urls
        .queries
        .iter()
        .map(|url| decode_query_component(query_component(url)).unwrap())
        .collect();
    assert_eq!(
        bodies,
        ["query {zeta()}", "query {alpha()}", "query {mid()}"]
    );
}

#[test]
fn test_queries_and_mutations_are_split() {
    let doc = response(json!([
        object(
            "Mutation",
            json!([field(
                "createUser",
                json!([arg("name", scalar_ref("String"))]),
                json!({ "kind": "OBJECT", "name": "User", "ofType": null })
            )])
        ),
        object(
            "Query",
            json!([field(
                "user",
                json!([arg("id", scalar_ref("ID"))]),
                json!({ "kind": "OBJECT", "name": "User", "ofType": null })
            )])
        ),
        object("User", json!([field("id", json!([]), non_null(scalar_ref("ID")))])),
    ]));

    let urls = synthesize(&doc, BASE, SynthesisOptions::default());

    assert_eq!(urls.len(), 2);
    assert_eq!(
        decode_query_component(query_component(&urls.queries[0])).as_deref(),
        Some("query {user(id: <ID>)}")
    );
    assert_eq!(
        decode_query_component(query_component(&urls.mutations[0])).as_deref(),
        Some("mutation {createUser(name: <String>)}")
    );
}

#[test]
fn test_inlined_return_fields_select_scalars() {
    let user_ref = json!({
        "kind": "OBJECT",
        "name": "User",
        "ofType": null,
        "fields": [
            field("id", json!([]), scalar_ref("ID")),
            field("name", json!([]), scalar_ref("String")),
            field("posts", json!([]), json!({ "kind": "LIST", "name": null, "ofType": null })),
            field("email", json!([]), non_null(scalar_ref("String")))
        ]
    });
    let doc = response(json!([object(
        "Query",
        json!([field("user", json!([arg("id", scalar_ref("ID"))]), user_ref)])
    )]));

    let ops: Vec<_> = root_operations(doc.schema().unwrap(), SynthesisOptions::default()).collect();

    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].body(), "user(id: <ID>) { id name }");
}

#[test]
fn test_every_url_starts_with_normalized_base() {
    let doc = response(json!([
        object("Query", json!([field("a", json!([]), scalar_ref("String"))])),
        object("Mutation", json!([field("b", json!([]), scalar_ref("String"))])),
    ]));

    for base in [BASE, "https://api.example.com/graphql/"] {
        let urls = synthesize(&doc, base, SynthesisOptions::default());
        for url in urls.queries.iter().chain(&urls.mutations) {
            assert!(url.starts_with("https://api.example.com/graphql?query="), "{url}");
        }
    }
}

#[test]
fn test_round_trip_recovers_document() {
    let doc = response(json!([object(
        "Query",
        json!([field(
            "search",
            json!([
                arg("term", non_null(scalar_ref("String"))),
                arg("limit", scalar_ref("Int")),
                arg("filter", json!({ "kind": "INPUT_OBJECT", "name": "Filter&Sort", "ofType": null }))
            ]),
            json!({ "kind": "LIST", "name": null, "ofType": scalar_ref("String") })
        )])
    )]));

    let schema = doc.schema().unwrap();
    let options = SynthesisOptions::default();
    let urls = synthesize(&doc, BASE, options);

    for (url, op) in urls.queries.iter().zip(root_operations(schema, options)) {
        assert_eq!(
            decode_query_component(query_component(url)),
            Some(op.document())
        );
    }
    assert_eq!(
        root_operations(schema, options).next().map(|op| op.body()),
        Some("search(term: <>, limit: <Int>, filter: <Filter&Sort>)".to_string())
    );
}

#[test]
fn test_unwrapped_placeholders() {
    let doc = response(json!([object(
        "Query",
        json!([field(
            "users",
            json!([arg(
                "ids",
                non_null(json!({ "kind": "LIST", "name": null, "ofType": non_null(scalar_ref("ID")) }))
            )]),
            json!({ "kind": "LIST", "name": null, "ofType": null })
        )])
    )]));

    let options = SynthesisOptions {
        placeholder_style: PlaceholderStyle::Unwrapped,
    };
    let body = root_operations(doc.schema().unwrap(), options)
        .next()
        .map(|op| op.body());

    assert_eq!(body.as_deref(), Some("users(ids: <[ID!]!>)"));
}

#[test]
fn test_no_root_types_gives_empty_lists() {
    let doc = response(json!([
        object("User", json!([field("id", json!([]), scalar_ref("ID"))])),
        { "kind": "SCALAR", "name": "ID", "fields": null },
    ]));

    let urls = synthesize(&doc, BASE, SynthesisOptions::default());

    assert!(urls.is_empty());
}

#[test]
fn test_root_names_are_case_sensitive_and_kind_checked() {
    let doc = response(json!([
        object("query", json!([field("a", json!([]), scalar_ref("String"))])),
        {
            "kind": "INTERFACE",
            "name": "Query",
            "fields": [field("b", json!([]), scalar_ref("String"))]
        },
    ]));

    assert!(synthesize(&doc, BASE, SynthesisOptions::default()).is_empty());
}

#[test]
fn test_custom_root_names_are_not_aliased() {
    let doc: IntrospectionResponse = serde_json::from_value(json!({
        "data": { "__schema": {
            "queryType": { "name": "RootQuery" },
            "mutationType": null,
            "types": [object("RootQuery", json!([field("a", json!([]), scalar_ref("String"))]))]
        } }
    }))
    .unwrap();

    assert!(synthesize(&doc, BASE, SynthesisOptions::default()).is_empty());
}

#[test]
fn test_missing_schema_gives_empty_lists() {
    let doc: IntrospectionResponse =
        serde_json::from_value(json!({ "errors": [{ "message": "forbidden" }] })).unwrap();

    assert!(synthesize(&doc, BASE, SynthesisOptions::default()).is_empty());
}

#[test]
fn test_partial_document_does_not_panic() {
    let doc = response(json!([object(
        "Query",
        json!([
            { "name": "bare" },
            { "name": null, "args": null, "type": null },
            field("ok", json!([{ "name": "x", "type": null }]), scalar_ref("String"))
        ])
    )]));

    let urls = synthesize(&doc, BASE, SynthesisOptions::default());
    let bodies: Vec<_> = urls
        .queries
        .iter()
        .filter_map(|url| decode_query_component(query_component(url)))
        .collect();

    assert_eq!(bodies, ["query {bare()}", "query {()}", "query {ok(x: <>)}"]);
}

#[test]
fn test_malformed_unrelated_types_do_not_hide_root_fields() {
    let doc = response(json!([
        object("Query", json!([field("ping", json!([]), scalar_ref("String"))])),
        { "kind": "INPUT_OBJECT", "name": "Weird", "fields": { "not": "a list" } },
        { "kind": "SCALAR", "name": "Date", "description": 7 },
    ]));

    let urls = synthesize(&doc, BASE, SynthesisOptions::default());

    assert_eq!(urls.queries.len(), 1);
    assert_eq!(
        decode_query_component(query_component(&urls.queries[0])).as_deref(),
        Some("query {ping()}")
    );
}
