use std::collections::HashMap;

use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use database_model::{
    admin_user, external_user, internal_user,
    prelude::*,
    user::{ActiveModel as UserActiveModel, Model as UserModel},
};
use domain_user::{
    model::{
        entity::User,
        vo::{ProfileKind, Role, UserProfile},
    },
    repository::UserRepo,
};
use sea_orm::{prelude::*, sea_query::Expr, QueryOrder, QueryTrait, Set};

use crate::infrastructure::database::OrmRepo;

impl OrmRepo {
    /// Resolve the profile of every user row with one query per profile table.
    async fn with_profiles(&self, models: Vec<UserModel>) -> anyhow::Result<Vec<User>> {
        let conn = self.db.get_connection();
        let ids = models.iter().map(|el| el.id).collect::<Vec<_>>();
        let admins = AdminUserEntity::find()
            .filter(AdminUserColumn::Id.is_in(ids.clone()))
            .all(conn)
            .await?
            .into_iter()
            .map(|el| el.id)
            .collect::<Vec<_>>();
        let mut internals = InternalUserEntity::find()
            .filter(InternalUserColumn::Id.is_in(ids.clone()))
            .all(conn)
            .await?
            .into_iter()
            .map(|el| (el.id, el))
            .collect::<HashMap<_, _>>();
        let mut externals = ExternalUserEntity::find()
            .filter(ExternalUserColumn::Id.is_in(ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|el| (el.id, el))
            .collect::<HashMap<_, _>>();
        Ok(models
            .into_iter()
            .map(|model| {
                let profile = if admins.contains(&model.id) {
                    UserProfile::Admin
                } else if let Some(el) = internals.remove(&model.id) {
                    UserProfile::Internal {
                        position: el.position,
                        department: el.department,
                    }
                } else if let Some(el) = externals.remove(&model.id) {
                    UserProfile::External {
                        cuil: el.cuil,
                        company: el.company,
                        description: el.description,
                    }
                } else {
                    UserProfile::Base
                };
                to_user(model, profile)
            })
            .collect())
    }
}

fn to_user(model: UserModel, profile: UserProfile) -> User {
    User {
        id: model.id,
        user_name: model.user_name,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password_hash,
        is_enabled: model.is_enabled,
        email_confirmed: model.email_confirmed,
        image: model.image,
        profile,
        created_time: model.created_time,
    }
}

fn to_active_model(entity: &User) -> UserActiveModel {
    let entity = entity.to_owned();
    UserActiveModel {
        id: Set(entity.id),
        user_name: Set(entity.user_name),
        email: Set(entity.email),
        first_name: Set(entity.first_name),
        last_name: Set(entity.last_name),
        password_hash: Set(entity.password_hash),
        is_enabled: Set(entity.is_enabled),
        email_confirmed: Set(entity.email_confirmed),
        image: Set(entity.image),
        created_time: Set(entity.created_time),
    }
}

#[async_trait]
impl UserRepo for OrmRepo {
    async fn get_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let model = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(self.db.get_connection())
            .await?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(self.with_profiles(vec![model]).await?.pop())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids.to_vec()))
            .all(self.db.get_connection())
            .await?;
        self.with_profiles(models).await
    }

    async fn get_by_profile_kind(&self, kind: ProfileKind) -> anyhow::Result<Vec<User>> {
        let conn = self.db.get_connection();
        let ids: Vec<Uuid> = match kind {
            ProfileKind::Admin => {
                AdminUserEntity::find().all(conn).await?.into_iter().map(|el| el.id).collect()
            }
            ProfileKind::Internal => {
                InternalUserEntity::find().all(conn).await?.into_iter().map(|el| el.id).collect()
            }
            ProfileKind::External => {
                ExternalUserEntity::find().all(conn).await?.into_iter().map(|el| el.id).collect()
            }
        };
        self.get_by_ids(&ids).await
    }

    async fn role_exists(&self, role: Role) -> anyhow::Result<bool> {
        Ok(RoleEntity::find_by_id(role.as_str().to_string())
            .one(self.db.get_connection())
            .await?
            .is_some())
    }

    async fn assign_image_to_all(&self, image: &str) -> anyhow::Result<u64> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::Image, Expr::value(image))
            .filter(UserColumn::Image.is_null())
            .exec(self.db.get_connection())
            .await?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl ReadOnlyRepository<User> for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<User> {
        ReadOnlyRepository::<User>::find_by_id(self, id)
            .await?
            .ok_or(anyhow::anyhow!("there is no such user with key {id}"))
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let Some(model) = UserEntity::find_by_id(id).one(self.db.get_connection()).await? else {
            return Ok(None);
        };
        Ok(self.with_profiles(vec![model]).await?.pop())
    }

    async fn get_all(&self) -> anyhow::Result<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(UserColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?;
        self.with_profiles(models).await
    }
}

#[async_trait]
impl MutableRepository<User> for OrmRepo {
    async fn insert(&self, entity: &User) -> anyhow::Result<Uuid> {
        let backend = self.backend();
        let mut stmts = vec![UserEntity::insert(to_active_model(entity)).build(backend)];
        let profile = match entity.profile.clone() {
            UserProfile::Admin => Some(
                AdminUserEntity::insert(admin_user::ActiveModel { id: Set(entity.id) })
                    .build(backend),
            ),
            UserProfile::Internal {
                position,
                department,
            } => Some(
                InternalUserEntity::insert(internal_user::ActiveModel {
                    id: Set(entity.id),
                    position: Set(position),
                    department: Set(department),
                })
                .build(backend),
            ),
            UserProfile::External {
                cuil,
                company,
                description,
            } => Some(
                ExternalUserEntity::insert(external_user::ActiveModel {
                    id: Set(entity.id),
                    cuil: Set(cuil),
                    company: Set(company),
                    description: Set(description),
                })
                .build(backend),
            ),
            UserProfile::Base => None,
        };
        stmts.extend(profile);
        self.push(stmts).await;
        Ok(entity.id)
    }

    async fn update(&self, entity: &User) -> anyhow::Result<()> {
        let mut model = to_active_model(entity);
        model.id = sea_orm::ActiveValue::NotSet;
        model.created_time = sea_orm::ActiveValue::NotSet;
        let stmt = UserEntity::update_many()
            .set(model)
            .filter(UserColumn::Id.eq(entity.id))
            .build(self.backend());
        self.push([stmt]).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<User> for OrmRepo {}
