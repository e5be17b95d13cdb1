//! Generic admin create/edit form pipeline.
//!
//! A [`FormController`] mediates between a remote record store (the injected
//! [`ResourceApi`]) and a presentation form for one resource type. The
//! frontend wraps it in a Yew page; tests drive it with a recording double.
//!
//! State machine:
//! `Idle -> Loading (edit only) -> Ready -> Submitting -> (Success -> Navigated) | (Error -> Ready)`

use std::rc::Rc;

use async_trait::async_trait;

use crate::{dates, model::NewsArticle};

/// Whether the page edits an existing record or drafts a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Loading,
    Ready,
    Submitting,
    Navigated,
}

/// Human-readable feedback strings, keyed by operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessages {
    pub create_success: String,
    pub create_error: String,
    pub update_success: String,
    pub update_error: String,
    pub load_error: String,
}

/// Outcome surfaced to the operator after a load or submit round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

/// Pure record transform applied at the load/submit boundary. A transform
/// error is treated as a load/submit failure respectively.
pub type Transform<R> = Rc<dyn Fn(R) -> Result<R, String>>;

/// Remote store for one resource type, injected so tests can substitute a
/// double. No retry, batching, or caching is implemented behind it.
#[async_trait(?Send)]
pub trait ResourceApi<R> {
    async fn fetch_by_id(&self, id: &str) -> Result<R, String>;
    async fn create(&self, record: R) -> Result<R, String>;
    async fn update(&self, id: &str, record: R) -> Result<R, String>;
    async fn delete(&self, id: &str) -> Result<(), String>;
}

/// Everything a resource contributes to the pipeline: defaults for a new
/// draft, the two boundary transforms, and the feedback wording.
#[derive(Clone)]
pub struct FormPageConfig<R> {
    pub default_values: R,
    pub load_transform: Transform<R>,
    pub submit_transform: Transform<R>,
    pub messages: FormMessages,
}

/// Orchestrates load -> edit -> submit for a single form page instance.
/// The controller exclusively owns the in-memory draft for the session.
pub struct FormController<R, A> {
    config: FormPageConfig<R>,
    api: A,
    mode: Mode,
    state: FormState,
    draft: R,
}

impl<R, A> FormController<R, A>
where
    R: Clone,
    A: ResourceApi<R>,
{
    pub fn new(config: FormPageConfig<R>, api: A, mode: Mode) -> Self {
        let draft = config.default_values.clone();
        let state = match mode {
            Mode::Create => FormState::Ready,
            Mode::Edit(_) => FormState::Idle,
        };
        Self { config, api, mode, state, draft }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    /// Replace the draft with the operator's latest edit.
    pub fn set_draft(&mut self, draft: R) {
        self.draft = draft;
    }

    /// Seed the form. Create mode keeps the configured defaults and never
    /// touches the network; edit mode fetches the record once and runs it
    /// through the load transform. On failure the configured load-error
    /// message is surfaced and the form stays interactive over the defaults.
    pub async fn load(&mut self) -> Option<Feedback> {
        let id = match &self.mode {
            Mode::Create => {
                self.state = FormState::Ready;
                return None;
            },
            Mode::Edit(id) => id.clone(),
        };

        self.state = FormState::Loading;
        let loaded = match self.api.fetch_by_id(&id).await {
            Ok(record) => (self.config.load_transform)(record),
            Err(err) => Err(err),
        };
        self.state = FormState::Ready;

        match loaded {
            Ok(record) => {
                self.draft = record;
                None
            },
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "failed to load record for editing");
                Some(Feedback::Error(self.config.messages.load_error.clone()))
            },
        }
    }

    /// Run the submit transform over the current draft and call create or
    /// update depending on mode. The draft is preserved untouched on any
    /// failure so the operator can fix it up and resubmit.
    pub async fn submit(&mut self) -> Feedback {
        self.state = FormState::Submitting;

        let outcome = match (self.config.submit_transform)(self.draft.clone()) {
            Ok(payload) => match &self.mode {
                Mode::Create => self.api.create(payload).await.map(|_| ()),
                Mode::Edit(id) => self.api.update(id, payload).await.map(|_| ()),
            },
            Err(err) => Err(err),
        };

        let messages = &self.config.messages;
        match outcome {
            Ok(()) => {
                self.state = FormState::Navigated;
                let message = match self.mode {
                    Mode::Create => messages.create_success.clone(),
                    Mode::Edit(_) => messages.update_success.clone(),
                };
                Feedback::Success(message)
            },
            Err(err) => {
                tracing::warn!(error = %err, "form submit failed");
                self.state = FormState::Ready;
                let message = match self.mode {
                    Mode::Create => messages.create_error.clone(),
                    Mode::Edit(_) => messages.update_error.clone(),
                };
                Feedback::Error(message)
            },
        }
    }
}

/// Pipeline configuration for the News resource: defaults dated `today`
/// (`YYYY-MM-DD`), date conversion at both boundaries, office wording.
pub fn news_form_config(today: impl Into<String>) -> FormPageConfig<NewsArticle> {
    FormPageConfig {
        default_values: NewsArticle::draft_defaults(today),
        load_transform: Rc::new(|mut record: NewsArticle| {
            record.date = dates::date_from_wire(&record.date).map_err(|e| e.to_string())?;
            Ok(record)
        }),
        submit_transform: Rc::new(|mut record: NewsArticle| {
            record.date = dates::date_to_wire(&record.date).map_err(|e| e.to_string())?;
            Ok(record)
        }),
        messages: FormMessages {
            create_success: "News article created.".to_string(),
            create_error: "Could not create the news article. Please try again.".to_string(),
            update_success: "News article updated.".to_string(),
            update_error: "Could not save your changes. Please try again.".to_string(),
            load_error: "Could not load the news article.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::model::NewsArticle;

    /// Recording double: remembers every call and answers from canned
    /// results.
    #[derive(Default)]
    struct RecordingApi {
        fetched: RefCell<Vec<String>>,
        created: RefCell<Vec<NewsArticle>>,
        updated: RefCell<Vec<(String, NewsArticle)>>,
        fetch_response: Option<NewsArticle>,
        fail_submit: bool,
    }

    #[async_trait(?Send)]
    impl ResourceApi<NewsArticle> for RecordingApi {
        async fn fetch_by_id(&self, id: &str) -> Result<NewsArticle, String> {
            self.fetched.borrow_mut().push(id.to_string());
            self.fetch_response.clone().ok_or_else(|| "not found".to_string())
        }

        async fn create(&self, record: NewsArticle) -> Result<NewsArticle, String> {
            self.created.borrow_mut().push(record.clone());
            if self.fail_submit {
                return Err("boom".to_string());
            }
            let mut created = record;
            created.id = "assigned-id".to_string();
            Ok(created)
        }

        async fn update(&self, id: &str, record: NewsArticle) -> Result<NewsArticle, String> {
            self.updated.borrow_mut().push((id.to_string(), record.clone()));
            if self.fail_submit {
                return Err("boom".to_string());
            }
            Ok(record)
        }

        async fn delete(&self, _id: &str) -> Result<(), String> {
            Ok(())
        }
    }

    fn stored_article() -> NewsArticle {
        NewsArticle {
            id: "n-42".into(),
            title: "Spring exchange fair".into(),
            category: "Events".into(),
            summary: "Meet partner universities".into(),
            content: "Full program".into(),
            image_url: String::new(),
            is_featured: false,
            date: "2025-03-10T00:00:00.000Z".into(),
            is_published: true,
        }
    }

    #[tokio::test]
    async fn create_mode_seeds_defaults_and_never_fetches() {
        let api = RecordingApi::default();
        let mut controller = FormController::new(news_form_config("2025-01-15"), api, Mode::Create);

        assert_eq!(controller.state(), FormState::Ready);
        let feedback = controller.load().await;
        assert_eq!(feedback, None);
        assert_eq!(controller.state(), FormState::Ready);
        assert_eq!(*controller.draft(), NewsArticle::draft_defaults("2025-01-15"));
        assert!(controller.api.fetched.borrow().is_empty());
    }

    #[tokio::test]
    async fn edit_mode_fetches_once_and_applies_load_transform() {
        let api = RecordingApi { fetch_response: Some(stored_article()), ..Default::default() };
        let mut controller =
            FormController::new(news_form_config("2025-01-15"), api, Mode::Edit("n-42".into()));

        assert_eq!(controller.state(), FormState::Idle);
        let feedback = controller.load().await;
        assert_eq!(feedback, None);
        assert_eq!(controller.state(), FormState::Ready);
        assert_eq!(*controller.api.fetched.borrow(), vec!["n-42".to_string()]);
        // Wire timestamp arrives in the draft as a plain calendar date.
        assert_eq!(controller.draft().date, "2025-03-10");
        assert_eq!(controller.draft().title, "Spring exchange fair");
    }

    #[tokio::test]
    async fn load_failure_surfaces_load_error_and_stays_interactive() {
        let api = RecordingApi::default(); // fetch answers "not found"
        let mut controller =
            FormController::new(news_form_config("2025-01-15"), api, Mode::Edit("gone".into()));

        let feedback = controller.load().await;
        assert_eq!(feedback, Some(Feedback::Error("Could not load the news article.".into())));
        assert_eq!(controller.state(), FormState::Ready);
        assert_eq!(*controller.draft(), NewsArticle::draft_defaults("2025-01-15"));
    }

    #[tokio::test]
    async fn submit_in_create_mode_calls_create_once_with_transformed_draft() {
        let api = RecordingApi::default();
        let mut controller = FormController::new(news_form_config("2025-01-15"), api, Mode::Create);
        controller.load().await;

        let mut draft = controller.draft().clone();
        draft.title = "Orientation Week".to_string();
        draft.category = "Events".to_string();
        controller.set_draft(draft);

        let feedback = controller.submit().await;
        assert_eq!(feedback, Feedback::Success("News article created.".into()));
        assert_eq!(controller.state(), FormState::Navigated);

        let created = controller.api.created.borrow();
        assert_eq!(created.len(), 1);
        assert!(controller.api.updated.borrow().is_empty());
        let payload = &created[0];
        assert_eq!(payload.title, "Orientation Week");
        assert_eq!(payload.category, "Events");
        assert_eq!(payload.date, "2025-01-15T00:00:00.000Z");
        assert_eq!(payload.summary, "");
        assert!(payload.is_published);
        assert!(!payload.is_featured);
    }

    #[tokio::test]
    async fn submit_in_edit_mode_calls_update_once_with_original_id() {
        let api = RecordingApi { fetch_response: Some(stored_article()), ..Default::default() };
        let mut controller =
            FormController::new(news_form_config("2025-01-15"), api, Mode::Edit("n-42".into()));
        controller.load().await;

        let mut draft = controller.draft().clone();
        draft.summary = "Updated summary".to_string();
        controller.set_draft(draft);

        let feedback = controller.submit().await;
        assert_eq!(feedback, Feedback::Success("News article updated.".into()));

        let updated = controller.api.updated.borrow();
        assert_eq!(updated.len(), 1);
        assert!(controller.api.created.borrow().is_empty());
        let (id, payload) = &updated[0];
        assert_eq!(id, "n-42");
        assert_eq!(payload.summary, "Updated summary");
        assert_eq!(payload.date, "2025-03-10T00:00:00.000Z");
    }

    #[tokio::test]
    async fn failed_submit_preserves_draft_and_surfaces_one_error() {
        let api = RecordingApi { fail_submit: true, ..Default::default() };
        let mut controller = FormController::new(news_form_config("2025-01-15"), api, Mode::Create);
        controller.load().await;

        let mut draft = controller.draft().clone();
        draft.title = "Visa workshop".to_string();
        draft.category = "Announcements".to_string();
        controller.set_draft(draft.clone());

        let feedback = controller.submit().await;
        assert_eq!(
            feedback,
            Feedback::Error("Could not create the news article. Please try again.".into())
        );
        assert_eq!(controller.state(), FormState::Ready);
        // Draft still holds the operator's values, form-layer date included.
        assert_eq!(*controller.draft(), draft);
        assert_eq!(controller.draft().date, "2025-01-15");
    }

    #[tokio::test]
    async fn submit_transform_error_counts_as_submit_failure() {
        let api = RecordingApi::default();
        let mut controller = FormController::new(news_form_config("2025-01-15"), api, Mode::Create);
        controller.load().await;

        let mut draft = controller.draft().clone();
        draft.date = "15/01/2025".to_string(); // not a calendar date
        controller.set_draft(draft.clone());

        let feedback = controller.submit().await;
        assert!(matches!(feedback, Feedback::Error(_)));
        assert_eq!(controller.state(), FormState::Ready);
        assert_eq!(*controller.draft(), draft);
        assert!(controller.api.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn load_transform_error_counts_as_load_failure() {
        let mut bad = stored_article();
        bad.date = "yesterday".to_string();
        let api = RecordingApi { fetch_response: Some(bad), ..Default::default() };
        let mut controller =
            FormController::new(news_form_config("2025-01-15"), api, Mode::Edit("n-42".into()));

        let feedback = controller.load().await;
        assert_eq!(feedback, Some(Feedback::Error("Could not load the news article.".into())));
        assert_eq!(controller.state(), FormState::Ready);
    }
}
