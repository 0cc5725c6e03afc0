use leptos::*;

use portfolio_core::{
    entities::{id::CommentId, query::CommentQuery},
    CommentListView, LikeAction, Settlement,
};
use portfolio_frontend_api::CommentApi;

/// Shared state of the comment section, handed down to every component.
#[derive(Clone, Copy)]
pub struct CommentSection {
    pub api: StoredValue<CommentApi>,
    pub view_model: RwSignal<CommentListView>,
    pub query: RwSignal<CommentQuery>,
    /// Failure of the last user interaction.
    pub notice: RwSignal<Option<String>>,
    pub load: Action<CommentQuery, ()>,
}

impl CommentSection {
    pub fn reload(self) {
        self.load.dispatch(self.query.get_untracked());
    }

    fn notify_rollback(self, settlement: Option<Settlement>, msg: &str) {
        if settlement == Some(Settlement::RolledBack) {
            self.notice.set(Some(msg.to_owned()));
        }
    }

    pub fn toggle_like(self, id: CommentId) {
        let request = match self.view_model.try_update(|vm| vm.toggle_like(id)) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                log::warn!("Cannot toggle like: {err}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let api = self.api.get_value();
            let result = match request.action {
                LikeAction::Like => api.like_comment(id).await,
                LikeAction::Unlike => api.unlike_comment(id).await,
            };
            let settlement = self
                .view_model
                .try_update(|vm| vm.settle_like(&request, result))
                .flatten();
            self.notify_rollback(settlement, "Your reaction could not be saved.");
        });
    }

    pub fn delete(self, id: CommentId) {
        let request = match self.view_model.try_update(|vm| vm.delete(id)) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                log::warn!("Cannot delete comment: {err}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = self.api.get_value().delete_comment(id).await;
            let settlement = self
                .view_model
                .try_update(|vm| vm.settle_delete(&request, result))
                .flatten();
            self.notify_rollback(settlement, "The comment could not be deleted.");
            self.reload();
        });
    }

    pub fn translate(self, id: CommentId) {
        let request = match self.view_model.try_update(|vm| vm.translate(id)) {
            Some(Ok(Some(request))) => request,
            Some(Ok(None)) | None => return,
            Some(Err(err)) => {
                log::warn!("Cannot translate comment: {err}");
                return;
            }
        };
        spawn_local(async move {
            let result = self
                .api
                .get_value()
                .translate(&request.message, &request.language)
                .await;
            let settlement = self
                .view_model
                .try_update(|vm| vm.settle_translation(&request, result))
                .flatten();
            self.notify_rollback(settlement, "The comment could not be translated.");
        });
    }
}
