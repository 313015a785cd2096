//! SeaORM entities for the text-canvas module.

pub use canvas::Entity as CanvasEntity;
pub use settings::Entity as SettingsEntity;

/// Settings entity for the `settings` table.
pub mod settings {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "settings")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub name: String,
        pub min_font_size: i32,
        pub max_font_size: i32,
        pub line_space: i32,
        pub word_space: i32,
        pub canvas_height: i32,
        pub canvas_width: i32,
        pub padding: i32,
        pub is_default: bool,
        pub created_at: TimeDateTimeWithTimeZone,
        pub updated_at: TimeDateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::canvas::Entity")]
        Canvases,
    }

    impl Related<super::canvas::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Canvases.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Canvas entity for the `canvases` table.
pub mod canvas {
    use sea_orm::entity::prelude::*;
    use uuid::Uuid;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "canvases")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub filename: String,
        pub user_input: String,
        pub created_at: TimeDateTimeWithTimeZone,
        pub accepted: bool,
        pub completed: bool,
        pub settings_id: Option<Uuid>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::settings::Entity",
            from = "Column::SettingsId",
            to = "super::settings::Column::Id"
        )]
        Settings,
    }

    impl Related<super::settings::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Settings.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
