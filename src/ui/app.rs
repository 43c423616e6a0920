use std::future::Future;
use std::sync::mpsc;

use crossterm::event::KeyEvent;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::mvi::Reducer;
use crate::store::{AppContext, ThemeMode};
use crate::ui::events::{AppEvent, Completion};
use crate::ui::input::handle_key;
use crate::ui::routes::Route;
use crate::ui::theme::{palette, Palette};
use crate::ui::views::task_detail::TaskDetailView;
use crate::ui::views::task_form::TaskForm;
use crate::ui::views::task_list::TaskListView;
use crate::ui::views::users::UsersView;
use crate::ui::views::{
    dashboard, Command, ConfirmIntent, ConfirmReducer, ConfirmState, PendingDelete, TaskSubmission,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the current route and every view's local state.
///
/// Lives on the UI thread. Store operations run on the tokio runtime and
/// report back through the event channel.
pub struct App {
    ctx: AppContext,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    theme: watch::Receiver<ThemeMode>,
    route: Route,
    should_quit: bool,
    task_list: TaskListView,
    task_detail: Option<TaskDetailView>,
    task_form: Option<TaskForm>,
    users: UsersView,
    confirm: ConfirmState,
}

impl App {
    /// Nothing is fetched until the first [`App::navigate`].
    pub fn new(ctx: AppContext, runtime: Handle, events: mpsc::Sender<AppEvent>) -> Self {
        let theme = ctx.theme.subscribe();
        Self {
            ctx,
            runtime,
            events,
            theme,
            route: Route::default(),
            should_quit: false,
            task_list: TaskListView::default(),
            task_detail: None,
            task_form: None,
            users: UsersView::default(),
            confirm: ConfirmState::default(),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn theme_mode(&self) -> ThemeMode {
        *self.theme.borrow()
    }

    pub fn palette(&self) -> &'static Palette {
        palette(self.theme_mode())
    }

    pub fn task_list(&self) -> &TaskListView {
        &self.task_list
    }

    pub fn task_detail(&self) -> Option<&TaskDetailView> {
        self.task_detail.as_ref()
    }

    pub fn task_form(&self) -> Option<&TaskForm> {
        self.task_form.as_ref()
    }

    pub fn users(&self) -> &UsersView {
        &self.users
    }

    pub fn confirm(&self) -> &ConfirmState {
        &self.confirm
    }

    /// True while a text field captures the keyboard.
    pub fn is_editing(&self) -> bool {
        match self.route {
            Route::TaskNew | Route::TaskEdit(_) => true,
            Route::TaskDetail(_) => self.task_detail.as_ref().is_some_and(|v| v.is_editing()),
            Route::Users => self.users.is_editing(),
            Route::Tasks | Route::Dashboard => false,
        }
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick | AppEvent::Resize => {}
            AppEvent::StoreChanged(store) => self.on_store_changed(store),
            AppEvent::Completed(completion) => self.on_completed(completion),
        }
    }

    /// Switch screens, resetting the target view's local state, and start
    /// the fetches it needs.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(from = %self.route, to = %route, "Navigate");
        match &route {
            Route::TaskDetail(id) => {
                if self.task_detail.as_ref().map(TaskDetailView::task_id) != Some(id.as_str()) {
                    self.task_detail = Some(TaskDetailView::new(id.clone()));
                    // Comments of the previous task must not show under this one.
                    self.ctx.comments.reset();
                }
            }
            Route::TaskNew => self.task_form = Some(TaskForm::create()),
            Route::TaskEdit(id) => {
                let mut form = TaskForm::edit(id.clone());
                let tasks = self.ctx.tasks.state();
                let known = tasks
                    .current
                    .as_ref()
                    .filter(|t| &t.id == id)
                    .or_else(|| tasks.find(id));
                if let Some(task) = known {
                    form.prefill(task);
                }
                self.task_form = Some(form);
            }
            Route::Users => self.users = UsersView::default(),
            Route::Tasks | Route::Dashboard => {}
        }
        self.route = route;
        self.load();
    }

    /// Run the fetches the current route renders from.
    pub fn load(&self) {
        let ctx = &self.ctx;
        match &self.route {
            Route::Tasks => {
                let tasks = ctx.tasks.clone();
                self.spawn(async move {
                    let _ = tasks.fetch_all().await;
                });
            }
            Route::TaskDetail(id) => {
                let (tasks, comments, id) = (ctx.tasks.clone(), ctx.comments.clone(), id.clone());
                self.spawn(async move {
                    let _ = tokio::join!(tasks.fetch_one(&id), comments.fetch_for_task(&id));
                });
            }
            Route::TaskNew => self.load_users(),
            Route::TaskEdit(id) => {
                let (tasks, id) = (ctx.tasks.clone(), id.clone());
                self.spawn(async move {
                    let _ = tasks.fetch_one(&id).await;
                });
                self.load_users();
            }
            Route::Users => self.load_users(),
            Route::Dashboard => {
                let report = ctx.report.clone();
                self.spawn(async move {
                    let _ = report.fetch().await;
                });
            }
        }
    }

    fn load_users(&self) {
        let users = self.ctx.users.clone();
        self.spawn(async move {
            let _ = users.fetch_all().await;
        });
    }

    /// Drop every cached slice and fetch the current screen again.
    pub fn reload(&mut self) {
        tracing::info!(route = %self.route, "Reloading");
        self.ctx.reset();
        self.load();
    }

    pub fn toggle_theme(&mut self) {
        self.ctx.theme.toggle();
    }

    /// Feed a key to the view of the current route.
    pub fn on_view_key(&mut self, key: KeyEvent) {
        let command = match &self.route {
            Route::Tasks => {
                let tasks = self.ctx.tasks.state();
                self.task_list.on_key(&key, &tasks.items)
            }
            Route::TaskDetail(_) => {
                let tasks = self.ctx.tasks.state();
                let comments = self.ctx.comments.state();
                self.task_detail.as_mut().and_then(|view| {
                    let task = tasks
                        .current
                        .as_ref()
                        .filter(|t| t.id == view.task_id())
                        .or_else(|| tasks.find(view.task_id()));
                    view.on_key(&key, task, &comments.items)
                })
            }
            Route::TaskNew | Route::TaskEdit(_) => {
                let users = self.ctx.users.state();
                self.task_form
                    .as_mut()
                    .and_then(|form| form.on_key(&key, &users.items))
            }
            Route::Users => {
                let users = self.ctx.users.state();
                self.users.on_key(&key, &users.items)
            }
            Route::Dashboard => dashboard::on_key(&key),
        };
        if let Some(command) = command {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Navigate(route) => self.navigate(route),
            Command::Refresh => self.load(),
            Command::SaveTask(submission) => self.save_task(submission),
            Command::AddComment { task_id, content } => {
                let (comments, tx) = (self.ctx.comments.clone(), self.events.clone());
                self.spawn(async move {
                    if comments.create(&task_id, &content).await.is_ok() {
                        let _ = tx.send(AppEvent::Completed(Completion::CommentAdded { task_id }));
                    }
                });
            }
            Command::Confirm(pending) => {
                dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Ask(pending));
            }
            Command::CreateUser(payload) => {
                let (users, tx) = (self.ctx.users.clone(), self.events.clone());
                self.spawn(async move {
                    if users.create(payload).await.is_ok() {
                        let _ = tx.send(AppEvent::Completed(Completion::UserCreated));
                    }
                });
            }
        }
    }

    fn save_task(&self, submission: TaskSubmission) {
        let (tasks, tx) = (self.ctx.tasks.clone(), self.events.clone());
        self.spawn(async move {
            let saved = match submission {
                TaskSubmission::Create(payload) => tasks.create(payload).await,
                TaskSubmission::Update { id, patch } => tasks.update(&id, patch).await,
            };
            if let Ok(task) = saved {
                let _ = tx.send(AppEvent::Completed(Completion::TaskSaved { id: task.id }));
            }
        });
    }

    /// User answered yes: run the pending delete.
    pub fn confirm_accept(&mut self) {
        let ConfirmState::Visible { pending } = &self.confirm else {
            return;
        };
        let pending = pending.clone();
        dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Accept);

        match pending {
            PendingDelete::Task { id } => {
                let (tasks, tx) = (self.ctx.tasks.clone(), self.events.clone());
                self.spawn(async move {
                    if tasks.delete(&id).await.is_ok() {
                        let _ = tx.send(AppEvent::Completed(Completion::TaskDeleted));
                    }
                });
            }
            PendingDelete::Comment { id } => {
                let comments = self.ctx.comments.clone();
                self.spawn(async move {
                    let _ = comments.delete(&id).await;
                });
            }
        }
    }

    pub fn confirm_cancel(&mut self) {
        dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Cancel);
    }

    fn on_store_changed(&mut self, store: &'static str) {
        if store != "tasks" {
            return;
        }
        // An edit form opened before its task arrived fills in now.
        let Some(form) = self.task_form.as_mut() else {
            return;
        };
        let Some(id) = form.awaiting_prefill().map(str::to_string) else {
            return;
        };
        let tasks = self.ctx.tasks.state();
        if let Some(task) = tasks.current.as_ref().filter(|t| t.id == id) {
            form.prefill(task);
        }
    }

    fn on_completed(&mut self, completion: Completion) {
        match completion {
            Completion::TaskSaved { id } => self.navigate(Route::TaskDetail(id)),
            Completion::TaskDeleted => self.navigate(Route::Tasks),
            Completion::CommentAdded { task_id } => {
                if let Some(view) = self.task_detail.as_mut().filter(|v| v.task_id() == task_id) {
                    view.comment_added();
                }
            }
            Completion::UserCreated => self.users.user_created(),
        }
    }

    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(future);
    }
}
