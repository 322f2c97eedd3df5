//! `param()` ... `endParam()` fragments for operation parameters.

use super::statement::StatementBuilder;
use crate::ir::HostType;
use crate::model::{Parameter, ParameterKind};

/// Swagger type name that enables the `arrayType` call.
pub const ARRAY_TYPE: &str = "array";

/// Append the nested parameter definition for `parameter`.
///
/// Field order: name, type, dataType, allowableValues, collectionFormat,
/// defaultValue, arrayType, required, description. Body parameters only get
/// name, type, required and description.
pub fn append_param(statement: &mut StatementBuilder, parameter: &Parameter) {
    statement.push_literal("\n.param()");
    statement.append_str("name", Some(parameter.name.as_str()));
    statement.append_enum(
        "type",
        HostType::RestParamType,
        Some(parameter.location.as_str()),
    );

    match &parameter.kind {
        ParameterKind::Serializable(serializable) => {
            let data_type = serializable.data_type.as_deref();
            statement.append_str("dataType", data_type);
            statement.append_varargs("allowableValues", &serializable.allowable_values);
            statement.append_enum(
                "collectionFormat",
                HostType::CollectionFormat,
                serializable.collection_format.as_deref(),
            );
            statement.append_raw("defaultValue", serializable.default_value.as_deref());

            if data_type == Some(ARRAY_TYPE) {
                if let Some(items) = &serializable.items {
                    statement.append_str("arrayType", items.data_type.as_deref());
                }
            }
        }
        ParameterKind::Body { .. } => {}
    }

    statement.append_bool("required", parameter.required);
    statement.append_str("description", parameter.description.as_deref());
    statement.push_literal("\n.endParam()");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Argument;
    use crate::model::{Items, ParameterLocation, SerializableParameter};
    use serde_json::json;

    fn emit(parameter: &Parameter) -> crate::ir::GeneratedStatement {
        let mut builder = StatementBuilder::default();
        append_param(&mut builder, parameter);
        builder.finish()
    }

    fn query(kind: SerializableParameter) -> Parameter {
        Parameter {
            name: "tags".into(),
            location: ParameterLocation::Query,
            required: None,
            description: None,
            kind: ParameterKind::Serializable(kind),
        }
    }

    #[test]
    fn test_full_field_order() {
        let parameter = Parameter {
            required: Some(true),
            description: Some("Tags to filter by".into()),
            ..query(SerializableParameter {
                data_type: Some("array".into()),
                default_value: Some("available".into()),
                allowable_values: vec!["a".into(), "b".into()],
                collection_format: Some("csv".into()),
                items: Some(Items {
                    data_type: Some("string".into()),
                }),
            })
        };
        let statement = emit(&parameter);
        assert_eq!(
            statement.method_names(),
            vec![
                "param",
                "name",
                "type",
                "dataType",
                "allowableValues",
                "collectionFormat",
                "defaultValue",
                "arrayType",
                "required",
                "description",
                "endParam",
            ]
        );
    }

    #[test]
    fn test_array_parameter_scenario() {
        let parameter = query(SerializableParameter {
            data_type: Some("array".into()),
            allowable_values: vec!["a".into(), "b".into()],
            collection_format: Some("csv".into()),
            ..Default::default()
        });
        let statement = emit(&parameter);

        let allowable = statement
            .fragments
            .iter()
            .find(|f| f.template.contains("allowableValues"))
            .unwrap();
        assert_eq!(allowable.template, "\n.allowableValues({},{})");
        assert_eq!(
            allowable.args,
            vec![Argument::Str("a".into()), Argument::Str("b".into())]
        );

        let format = statement
            .fragments
            .iter()
            .find(|f| f.template.contains("collectionFormat"))
            .unwrap();
        assert_eq!(
            format.args,
            vec![Argument::EnumConstant {
                ty: HostType::CollectionFormat,
                constant: "csv".into()
            }]
        );

        assert!(!statement.method_names().contains(&"arrayType"));
    }

    #[test]
    fn test_items_ignored_for_non_array() {
        let parameter = query(SerializableParameter {
            data_type: Some("string".into()),
            items: Some(Items {
                data_type: Some("string".into()),
            }),
            ..Default::default()
        });
        assert!(!emit(&parameter).method_names().contains(&"arrayType"));
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let parameter = Parameter {
            description: Some(String::new()),
            ..query(SerializableParameter {
                data_type: Some(String::new()),
                collection_format: Some(String::new()),
                ..Default::default()
            })
        };
        assert_eq!(
            emit(&parameter).method_names(),
            vec!["param", "name", "type", "endParam"]
        );
    }

    #[test]
    fn test_body_parameter_fields() {
        let parameter = Parameter {
            name: "body".into(),
            location: ParameterLocation::Body,
            required: Some(true),
            description: Some("Pet object".into()),
            kind: ParameterKind::Body {
                schema: Some(json!({"$ref": "#/definitions/Pet"})),
            },
        };
        let statement = emit(&parameter);
        assert_eq!(
            statement.method_names(),
            vec!["param", "name", "type", "required", "description", "endParam"]
        );
        assert!(statement.arguments().any(|a| *a
            == Argument::EnumConstant {
                ty: HostType::RestParamType,
                constant: "body".into()
            }));
    }

    #[test]
    fn test_default_value_is_unquoted() {
        let parameter = query(SerializableParameter {
            data_type: Some("integer".into()),
            default_value: Some("20".into()),
            ..Default::default()
        });
        let statement = emit(&parameter);
        assert!(statement
            .arguments()
            .any(|a| *a == Argument::Literal("20".into())));
    }
}
