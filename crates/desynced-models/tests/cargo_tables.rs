use desynced_cargo::{extract_key, schema_of, CargoPrinter, CargoRecord, Error, Mode};
use desynced_models::*;

fn keys(lines: &[String]) -> Vec<String> {
    lines.iter().filter_map(|l| extract_key(l)).map(str::to_string).collect()
}

fn assert_modes_agree<T: CargoRecord + 'static>(instance: &T) {
    let data = CargoPrinter::new(Mode::Data).print_record(instance).unwrap();
    let declarations = CargoPrinter::new(Mode::Declarations).print_type::<T>().unwrap();
    let template = CargoPrinter::new(Mode::Template).print_type::<T>().unwrap();

    assert_eq!(keys(&data), keys(&declarations));
    assert_eq!(keys(&data), keys(&template));
    assert_eq!(data.len(), schema_of::<T>().unwrap().line_count());
}

fn recipe() -> Recipe {
    Recipe::new(
        RecipeType::Construction,
        "Worker",
        vec![RecipeItem {
            name: "Metal Plate".into(),
            amount: 5,
        }],
        vec![RecipeProducer {
            name: "Construction".into(),
            time: 2.0,
        }],
        false,
    )
}

fn entity() -> Entity {
    Entity {
        name: "Worker".into(),
        lua_id: "f_bot_1s_a".into(),
        description: "Basic bot".into(),
        health: 100,
        power_usage_per_second: Some(-5.0),
        movement_speed: Some(3.5),
        visibility: Some(5),
        storage: 1,
        size: "Small".into(),
        race: Some(Race::Robot),
        types: vec![EntityType::Bot],
        sockets: Sockets {
            small_sockets: 1,
            ..Sockets::default()
        },
        slot_type: None,
        recipe: Some(recipe()),
    }
}

fn instruction() -> Instruction {
    Instruction {
        name: "Move To".into(),
        lua_id: "move_to".into(),
        description: "Moves to a target".into(),
        category: "Unit".into(),
        icon: "move.png".into(),
        args: vec![
            InstructionArg {
                arg_type: ArgType::Exec,
                name: "Next".into(),
                description: String::new(),
                data_type: String::new(),
            },
            InstructionArg {
                arg_type: ArgType::In,
                name: "Target".into(),
                description: "Unit to move to".into(),
                data_type: "entity".into(),
            },
        ],
    }
}

#[test]
fn every_table_agrees_across_modes() {
    assert_modes_agree(&entity());
    assert_modes_agree(&instruction());
    assert_modes_agree(&Component {
        name: "Power Cell".into(),
        lua_id: "c_power_cell".into(),
        description: String::new(),
        race: None,
        attachment_size: Some(ComponentSize::Small),
        power_usage_per_second: None,
        power_storage: Some(1000),
        drain_rate: Some(5.0),
        charge_rate: None,
        bandwidth: None,
        transfer_radius: None,
        trigger_radius: None,
        trigger_channels: String::new(),
        recipe: None,
    });
    assert_modes_agree(&Item {
        name: "Metal Plate".into(),
        lua_id: "metalplate".into(),
        description: String::new(),
        stack_size: 20,
        item_type: Some(ItemType::SimpleMaterial),
        recipe: None,
        mining_recipe: None,
    });
    assert_modes_agree(&Technology {
        name: "Robotics".into(),
        lua_id: "t_robotics".into(),
        description: String::new(),
        category: "Robots".into(),
        texture: String::new(),
        required_tech: vec!["Basics".into()],
        progress_count: 10,
        recipe: None,
    });
    assert_modes_agree(&TechnologyUnlock::new("Robotics", "Worker"));
    assert_modes_agree(&TechnologyCategory {
        name: "Robots".into(),
        lua_id: "robots".into(),
        discovery_tech: String::new(),
        initial_tech: "t_robotics".into(),
        sub_categories: vec![],
        texture: String::new(),
    });
    assert_modes_agree(&CategoryFilter {
        name: "Bots".into(),
        tab: "frame".into(),
        filter_field: "type".into(),
        filter_val: "Bot".into(),
        ordering: 1,
    });
}

#[test]
fn entity_recipe_keys_are_prefixed() {
    let lines = CargoPrinter::new(Mode::Data).print_record(&entity()).unwrap();

    assert!(lines.contains(&"|luaId = f_bot_1s_a".to_string()));
    assert!(lines.contains(&"|powerUsagePerSecond = -5.0".to_string()));
    assert!(lines.contains(&"|types1 = Bot".to_string()));
    assert!(lines.contains(&"|types2 = ".to_string()));
    assert!(lines.contains(&"|smallSockets = 1".to_string()));
    assert!(lines.contains(&"|slotType = ".to_string()));
    assert!(lines.contains(&"|unitType = Bot".to_string()));
    assert!(lines.contains(&"|recipeType = Construction".to_string()));
    assert!(lines.contains(&"|recipeItemsName1 = Metal Plate".to_string()));
    assert!(lines.contains(&"|recipeItemsAmount1 = 5".to_string()));
    assert!(lines.contains(&"|recipeItemsName6 = ".to_string()));
    assert!(lines.contains(&"|recipeProducersTime1 = 2.0".to_string()));
    assert!(lines.contains(&"|recipeIsDerived = False".to_string()));
}

#[test]
fn missing_recipe_renders_blank_slots() {
    let mut without = entity();
    without.recipe = None;

    let with = CargoPrinter::new(Mode::Data).print_record(&entity()).unwrap();
    let lines = CargoPrinter::new(Mode::Data).print_record(&without).unwrap();

    assert_eq!(keys(&with), keys(&lines));
    assert!(lines.contains(&"|recipeType = ".to_string()));
    assert!(lines.contains(&"|recipeItemsName1 = ".to_string()));
}

#[test]
fn instruction_args_are_prefixed_and_padded() {
    let lines = CargoPrinter::new(Mode::Data).print_record(&instruction()).unwrap();

    assert_eq!(lines[5], "|argsType1 = Exec");
    assert_eq!(lines[6], "|argsName1 = Next");
    assert!(lines.contains(&"|argsType2 = Input".to_string()));
    assert!(lines.contains(&"|argsDataType2 = entity".to_string()));
    assert!(lines.contains(&"|argsDataType7 = ".to_string()));
    assert_eq!(lines.len(), 5 + MAX_INSTRUCTION_ARGS * 4);
}

#[test]
fn too_many_instruction_args_fail() {
    let mut instruction = instruction();
    let arg = instruction.args[1].clone();
    instruction.args = vec![arg; MAX_INSTRUCTION_ARGS + 1];

    let err = CargoPrinter::new(Mode::Data).print_record(&instruction).unwrap_err();
    assert!(matches!(
        err,
        Error::CapacityExceeded {
            max_length: MAX_INSTRUCTION_ARGS,
            actual: 8,
            ..
        }
    ));
}

#[test]
fn enum_declarations_list_allowed_values() {
    let lines = CargoPrinter::new(Mode::Declarations).print_type::<Item>().unwrap();
    assert!(lines.contains(&"|type = String (allowed values=Package,Research,Resource,Simple,Advanced,Hi-Tech)".to_string()));
    assert!(lines.contains(&"|stackSize = Integer".to_string()));
    assert!(lines.contains(&"|recipeIsDerived = Boolean".to_string()));
    assert!(lines.contains(&"|recipeProducersTime4 = Float".to_string()));
}

#[test]
fn skipped_unlock_name_never_renders() {
    let unlock = TechnologyUnlock::new("Robotics", "Worker");
    assert_eq!(
        CargoPrinter::new(Mode::Data).print_record(&unlock).unwrap(),
        vec!["|techName = Robotics", "|unlocks = Worker"]
    );
    assert_eq!(
        CargoPrinter::new(Mode::Template).print_type::<TechnologyUnlock>().unwrap(),
        vec!["|techName = {{{techName|}}}", "|unlocks = {{{unlocks|}}}"]
    );
}

#[test]
fn test_item_mining_recipe_keys() {
    let item = Item {
        name: "Metal Ore".into(),
        lua_id: "metalore".into(),
        description: String::new(),
        stack_size: 40,
        item_type: Some(ItemType::Resource),
        recipe: None,
        mining_recipe: Some(MiningRecipe::new(
            "Metal Ore",
            vec![RecipeProducer {
                name: "Miner".into(),
                time: 2.0,
            }],
        )),
    };
    assert_modes_agree(&item);

    let lines = CargoPrinter::new(Mode::Data).print_record(&item).unwrap();
    assert!(lines.contains(&"|miningProducersName1 = Miner".to_string()));
    assert!(lines.contains(&"|miningProducersTime1 = 2.0".to_string()));
    assert!(lines.contains(&"|miningProducersName4 = ".to_string()));
    assert!(lines.contains(&"|recipeItemsName1 = ".to_string()));
}
