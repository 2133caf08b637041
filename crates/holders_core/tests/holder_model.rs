use holders_core::{Holder, HolderValidationError};

#[test]
fn holder_new_sets_defaults() {
    let holder = Holder::new("12345678900", "Ana");

    assert_eq!(holder.id, None);
    assert_eq!(holder.cpf_cnpj, "12345678900");
    assert_eq!(holder.name, "Ana");
    assert_eq!(holder.phone, None);
    assert_eq!(holder.complement, None);
    assert!(holder.is_active());
}

#[test]
fn validate_requires_tax_id_then_name() {
    assert_eq!(
        Holder::new("", "Ana").validate(),
        Err(HolderValidationError::EmptyCpfCnpj)
    );
    assert_eq!(
        Holder::new("12345678900", "").validate(),
        Err(HolderValidationError::EmptyName)
    );
    assert_eq!(Holder::new("12345678900", "Ana").validate(), Ok(()));
}

#[test]
fn validation_messages_name_the_field() {
    assert!(HolderValidationError::EmptyCpfCnpj
        .to_string()
        .contains("CPF/CNPJ"));
    assert!(HolderValidationError::EmptyName.to_string().contains("name"));
}

#[test]
fn soft_delete_marks_holder_inactive() {
    let mut holder = Holder::new("12345678900", "Ana");

    holder.soft_delete();
    assert!(holder.deleted);
    assert!(!holder.is_active());
}

#[test]
fn holder_serialization_uses_camel_case_wire_fields() {
    let mut holder = Holder::new("12345678900", "Ana");
    holder.id = Some(1);
    holder.address_number = Some("10".to_string());

    let json = serde_json::to_value(&holder).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["cpfCnpj"], "12345678900");
    assert_eq!(json["addressNumber"], "10");
    assert_eq!(json["deleted"], false);
    assert!(json["phone"].is_null());

    let decoded: Holder = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, holder);
}

#[test]
fn creation_payload_may_omit_id_and_optional_fields() {
    let value = serde_json::json!({
        "cpfCnpj": "12345678900",
        "name": "Ana",
        "city": "SP"
    });

    let holder: Holder = serde_json::from_value(value).unwrap();
    assert_eq!(holder.id, None);
    assert_eq!(holder.city.as_deref(), Some("SP"));
    assert_eq!(holder.email, None);
    assert!(!holder.deleted);
}
