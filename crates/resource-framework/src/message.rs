//! # Generic Messages
//!
//! Request types exchanged between a [`ResourceClient`](crate::ResourceClient) and
//! its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ResourceEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants map onto the repository operations every collection supports:
///
/// - **Create**: builds a resource from [`ResourceEntity::Create`] under a fresh id.
/// - **Get**: fetches a clone of one resource.
/// - **List**: returns every resource accepted by [`ResourceEntity::matches`], in insertion order.
/// - **Update**: applies [`ResourceEntity::Update`].
/// - **Delete**: removes a resource.
/// - **Action**: runs a resource-specific [`ResourceEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ResourceEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
