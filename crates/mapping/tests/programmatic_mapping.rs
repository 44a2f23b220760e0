//! End-to-end configuration sessions against the stock registry and mapping.

use pretty_assertions::assert_eq;
use warden_mapping::{
	ConstraintDef, ConstraintMapping, ElementKind, MappingConfig, MappingError, MappingSession,
	MethodElement, MethodElementContext, ParameterContext,
};
use warden_meta::{MethodDescriptor, MethodSignature, TypeRef, TypeRegistry};
use {parking_lot as _, proptest as _, rstest as _, serde as _, thiserror as _, toml as _};

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::TRACE)
		.try_init();
}

fn calculator_registry() -> TypeRegistry {
	TypeRegistry::builder("calculator")
		.push(MethodDescriptor::new("Calculator", "add", ["int", "int"]).returning("int"))
		.push(MethodDescriptor::new("Calculator", "divide", ["int", "int"]).returning("Quotient"))
		.build()
		.expect("calculator registry")
}

fn setup(config: MappingConfig) -> (MappingSession, ConstraintMapping) {
	init_tracing();
	let mapping = ConstraintMapping::new();
	let session = MappingSession::with_config(calculator_registry(), mapping.clone(), config);
	(session, mapping)
}

#[test]
fn cascade_then_pivot_then_constraint() {
	let (session, mapping) = setup(MappingConfig::default());

	let second = ParameterContext::new("Calculator", "add", ["int", "int"], 0, session)
		.unwrap()
		.mark_cascaded()
		.parameter(1)
		.unwrap()
		.constraint(ConstraintDef::not_null());

	let add = MethodSignature::new("add", ["int", "int"]);
	let owner = TypeRef::named("Calculator");

	let cascades = mapping.cascades();
	assert_eq!(cascades.len(), 1);
	assert_eq!(cascades[0].method_name(), "add");
	assert_eq!(cascades[0].element(), MethodElement::Parameter(0));
	assert_eq!(cascades[0].kind(), ElementKind::Parameter);

	let constraints = mapping.constraints();
	assert_eq!(constraints.len(), 1);
	assert_eq!(constraints[0].method().signature(), &add);
	assert_eq!(constraints[0].element(), MethodElement::Parameter(1));
	assert_eq!(constraints[0].definition(), &ConstraintDef::not_null());

	assert!(mapping.is_cascaded(&owner, &add, MethodElement::Parameter(0)));
	assert!(!mapping.is_cascaded(&owner, &add, MethodElement::Parameter(1)));
	assert!(
		mapping
			.constraints_for(second.method_handle(), MethodElement::Parameter(0))
			.is_empty()
	);
}

#[test]
fn missing_overload_names_type_and_signature() {
	let (session, mapping) = setup(MappingConfig::default());

	let err = ParameterContext::new("Calculator", "subtract", ["int"], 0, session).unwrap_err();
	let message = err.to_string();

	assert!(matches!(err, MappingError::InvalidMethodReference { .. }));
	assert!(message.contains("subtract(int)"), "{message}");
	assert!(message.contains("Calculator"), "{message}");
	assert!(!message.contains(", )"), "{message}");
	assert!(mapping.is_empty());
}

#[test]
fn full_session_through_type_entry() {
	let (session, mapping) = setup(MappingConfig::default());

	let divide = session
		.type_of("Calculator")
		.method("divide", ["int", "int"])
		.unwrap();
	divide
		.parameter(1)
		.unwrap()
		.constraint(ConstraintDef::min(1).message("divisor must be positive"))
		.return_value()
		.unwrap()
		.constraint(ConstraintDef::not_null())
		.mark_cascaded();

	let handle = divide.method_handle();
	assert_eq!(handle.return_type(), Some(&TypeRef::named("Quotient")));
	assert_eq!(
		mapping.constraints_for(handle, MethodElement::Parameter(1)),
		vec![ConstraintDef::min(1).message("divisor must be positive")]
	);
	assert_eq!(
		mapping.constraints_for(handle, MethodElement::ReturnValue),
		vec![ConstraintDef::not_null()]
	);
	assert!(mapping.is_cascaded(divide.owner(), divide.signature(), MethodElement::ReturnValue));
	assert_eq!(mapping.configured_types(), vec![TypeRef::named("Calculator")]);
	assert_eq!(mapping.len(), 3);
}

#[test]
fn index_check_is_configurable() {
	let config = MappingConfig::from_toml(r#"parameter-index-check = "eager""#).unwrap();
	let (eager, _) = setup(config);
	let err = ParameterContext::new("Calculator", "add", ["int", "int"], 5, eager).unwrap_err();
	assert!(matches!(err, MappingError::ParameterIndexOutOfRange { index: 5, arity: 2, .. }));

	let (unchecked, mapping) = setup(MappingConfig::default());
	ParameterContext::new("Calculator", "add", ["int", "int"], 5, unchecked)
		.unwrap()
		.constraint(ConstraintDef::not_null());
	assert_eq!(mapping.constraints()[0].element(), MethodElement::Parameter(5));
}

#[test]
fn sessions_never_share_a_mapping_implicitly() {
	let (first, first_mapping) = setup(MappingConfig::default());
	let (second, second_mapping) = setup(MappingConfig::default());

	first.type_of("Calculator");
	second
		.type_of("Calculator")
		.method("add", ["int", "int"])
		.unwrap()
		.return_value()
		.unwrap()
		.constraint(ConstraintDef::max(10));

	assert!(!first.same_session(&second));
	assert!(!first_mapping.shares_store_with(&second_mapping));
	assert!(first_mapping.is_empty());
	assert_eq!(first_mapping.configured_types(), vec![TypeRef::named("Calculator")]);
	assert_eq!(second_mapping.len(), 1);
}
