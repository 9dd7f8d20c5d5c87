use drizzlegen_core::{
    get_db_name, DbNameResolver, Error, Field, FieldKind, FieldSource, GeneratorOptions,
};
use serde_json::json;

struct SchemaField {
    #[allow(dead_code)]
    db_name: Option<String>,
    column: String,
}

impl DbNameResolver for SchemaField {
    fn get_db_name(&self) -> String {
        self.column.clone()
    }
}

fn field(name: &str, db_name: Option<&str>) -> Field {
    Field {
        name: name.to_string(),
        db_name: db_name.map(str::to_string),
        kind: FieldKind::Scalar,
        type_name: "Int".to_string(),
        is_list: false,
        is_required: true,
        is_id: false,
        is_unique: false,
        has_default_value: false,
        relation_name: None,
        relation_from_fields: Vec::new(),
        relation_to_fields: Vec::new(),
        documentation: None,
    }
}

#[test]
fn resolver_wins_over_declared_db_name() {
    let wrapped = SchemaField {
        db_name: Some("ignored".to_string()),
        column: "author_id".to_string(),
    };
    assert_eq!(get_db_name(FieldSource::Resolver(&wrapped)), "author_id");
}

#[test]
fn falls_back_to_logical_name_when_db_name_is_null() {
    let value = json!({ "name": "authorId", "dbName": null });
    let source = FieldSource::from_json(&value).expect("declared shape");
    assert_eq!(get_db_name(source), "authorId");
}

#[test]
fn mapped_db_name_is_used() {
    let value = json!({ "name": "authorId", "dbName": "author_id" });
    let source = FieldSource::from_json(&value).expect("declared shape");
    assert_eq!(get_db_name(source), "author_id");

    assert_eq!(get_db_name(&field("createdAt", Some("created_at"))), "created_at");
    assert_eq!(get_db_name(&field("id", None)), "id");
}

#[test]
fn unsupported_shapes_are_rejected() {
    for value in [
        json!({ "title": "authorId" }),
        json!({ "name": "authorId" }),
        json!({ "name": 3, "dbName": null }),
        json!("authorId"),
    ] {
        let err = FieldSource::from_json(&value).err().expect("shape must be rejected");
        assert!(matches!(err, Error::UnsupportedFieldShape(_)), "{err}");
    }
}

#[test]
fn models_and_enum_values_resolve_through_dmmf() {
    let options = GeneratorOptions::from_json(json!({
        "generator": { "name": "drizzle", "output": { "value": "drizzle" } },
        "dmmf": {
            "datamodel": {
                "models": [{
                    "name": "User",
                    "dbName": "users",
                    "fields": [
                        { "name": "id", "dbName": null, "kind": "scalar", "type": "Int", "isId": true, "isGenerated": false },
                        { "name": "role", "dbName": "user_role", "kind": "enum", "type": "UserRole" },
                        { "name": "posts", "kind": "object", "type": "Post", "isList": true, "relationName": "PostToUser" }
                    ]
                }],
                "enums": [{
                    "name": "UserRole",
                    "values": [{ "name": "ADMIN", "dbName": "admin" }, { "name": "USER" }]
                }]
            }
        }
    }))
    .expect("decode options");

    let datamodel = &options.dmmf.datamodel;
    let user = datamodel.model("User").expect("user model");
    assert_eq!(get_db_name(user), "users");

    let columns: Vec<String> = user.column_fields().map(get_db_name).collect();
    assert_eq!(columns, vec!["id".to_string(), "user_role".to_string()]);

    let relations: Vec<&str> = user.relation_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(relations, vec!["posts"]);

    let role = datamodel.find_enum("UserRole").expect("enum");
    let labels: Vec<String> = role.values.iter().map(get_db_name).collect();
    assert_eq!(labels, vec!["admin".to_string(), "USER".to_string()]);
}
