use commander::command;
use commander::dtos::{CommandCreateDto, CommandReadDto, CommandUpdateDto};

fn stored() -> command::Model {
    command::Model {
        id: 7,
        title: "Restart nginx".to_string(),
        description: Some("systemctl restart nginx".to_string()),
        platform: "Linux".to_string(),
    }
}

#[test]
fn test_read_mapping_copies_every_field() {
    let model = stored();
    let dto = CommandReadDto::from(model.clone());

    assert_eq!(dto.id, model.id);
    assert_eq!(dto.title, model.title);
    assert_eq!(dto.description, model.description);
    assert_eq!(dto.platform, model.platform);
}

#[test]
fn test_create_mapping_leaves_id_unassigned() {
    let dto = CommandCreateDto {
        title: "Deploy".to_string(),
        description: None,
        platform: "AWS".to_string(),
    };
    let model = command::Model::from(dto);

    assert_eq!(model.id, 0);
    assert!(!model.is_persisted());
    assert_eq!(model.title, "Deploy");
    assert_eq!(model.description, None);
    assert_eq!(model.platform, "AWS");
}

#[test]
fn test_update_mapping_overwrites_fields_and_keeps_id() {
    let mut model = stored();
    CommandUpdateDto {
        title: "Reload nginx".to_string(),
        description: None,
        platform: "BSD".to_string(),
    }
    .apply_to(&mut model);

    assert_eq!(model.id, 7);
    assert_eq!(model.title, "Reload nginx");
    assert_eq!(model.description, None);
    assert_eq!(model.platform, "BSD");
}

#[test]
fn test_dtos_use_camel_case_json() {
    let json = serde_json::to_value(CommandReadDto::from(stored())).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Restart nginx");
    assert_eq!(json["platform"], "Linux");
    assert_eq!(json["description"], "systemctl restart nginx");
}

#[test]
fn test_create_dto_without_description_deserializes() {
    let dto: CommandCreateDto = serde_json::from_str(r#"{"title":"Deploy","platform":"AWS"}"#).unwrap();
    assert_eq!(dto.description, None);
    assert_eq!(dto.platform, "AWS");
}
