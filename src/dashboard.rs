//! Dashboard Controller
//!
//! Owns the page and the course store for one page session and runs the
//! load → render → filter cycle:
//!
//! 1. [`Dashboard::boot`] initializes immediately, or defers until the
//!    page reports `DomContentLoaded` when the document is still loading.
//! 2. Initialization spawns the stats, courses and enrollments loaders as
//!    independent tasks and attaches the filter listeners.
//! 3. Control events delivered through [`Dashboard::dispatch`] re-filter the
//!    store and re-render the course list.
//!
//! Loader failures are logged and isolated. Only the course loader shows a
//! message on the page; stats and enrollment failures leave the page as it was.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::loader::{fetch_document, DataSource, LoadError, COURSES_DOCUMENT, STUDENTS_DOCUMENT};
use crate::model::{CatalogueDocument, Course, StatsDocument, StudentsDocument};
use crate::page::{ElementId, EventKind, Page, PageEvent, ReadyState};
use crate::store::{CourseFilter, CourseStore, ALL_CATEGORIES};
use crate::view::{render_course_error, render_courses, render_enrollments, StatsView};

/// Listeners wired by initialization
const FILTER_LISTENERS: [(ElementId, EventKind); 2] = [
    (ElementId::CourseSearch, EventKind::Input),
    (ElementId::CategoryFilter, EventKind::Change),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BootState {
    NotStarted,
    /// Waiting for `DomContentLoaded`
    Deferred,
    Initialized,
}

/// Join handles of the three loader tasks; each yields whether its load succeeded
pub struct LoadHandles {
    pub stats: JoinHandle<bool>,
    pub courses: JoinHandle<bool>,
    pub enrollments: JoinHandle<bool>,
}

impl LoadHandles {
    /// Wait for every loader to finish
    ///
    /// Returns `true` when all three loads succeeded.
    pub async fn join(self) -> bool {
        let mut all_loaded = true;
        for (name, handle) in [
            ("stats", self.stats),
            ("courses", self.courses),
            ("enrollments", self.enrollments),
        ] {
            match handle.await {
                Ok(loaded) => all_loaded &= loaded,
                Err(e) => {
                    tracing::warn!(loader = name, "Loader task aborted: {}", e);
                    all_loaded = false;
                }
            }
        }
        all_loaded
    }
}

/// One dashboard page session
pub struct Dashboard {
    source: Arc<dyn DataSource>,
    page: RwLock<Page>,
    store: RwLock<CourseStore>,
    listeners: RwLock<HashSet<(ElementId, EventKind)>>,
    boot_state: Mutex<BootState>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn DataSource>, page: Page) -> Self {
        Self {
            source,
            page: RwLock::new(page),
            store: RwLock::new(CourseStore::new()),
            listeners: RwLock::new(HashSet::new()),
            boot_state: Mutex::new(BootState::NotStarted),
        }
    }

    /// Start the session according to the page's ready state
    ///
    /// Returns the loader handles when initialization ran now, `None` when
    /// it was deferred or had already happened.
    pub async fn boot(self: &Arc<Self>) -> Option<LoadHandles> {
        let ready_state = self.page.read().await.current_ready_state();

        if ready_state == ReadyState::Loading {
            let mut boot_state = self.boot_state.lock().await;
            if *boot_state == BootState::NotStarted {
                tracing::debug!("Document still loading, deferring initialization");
                *boot_state = BootState::Deferred;
            }
            return None;
        }

        self.initialize().await
    }

    /// Run the loaders and attach the filter listeners, at most once
    pub async fn initialize(self: &Arc<Self>) -> Option<LoadHandles> {
        {
            let mut boot_state = self.boot_state.lock().await;
            if *boot_state == BootState::Initialized {
                tracing::debug!("Dashboard already initialized");
                return None;
            }
            *boot_state = BootState::Initialized;
        }

        tracing::info!(source = %self.source.describe(), "Initializing dashboard");

        // Each load_* logs its own error; the task only reports success
        let handles = LoadHandles {
            stats: self.spawn_loader(|d| async move { d.load_stats().await.is_ok() }),
            courses: self.spawn_loader(|d| async move { d.load_courses().await.is_ok() }),
            enrollments: self.spawn_loader(|d| async move { d.load_enrollments().await.is_ok() }),
        };

        self.attach_listeners().await;

        Some(handles)
    }

    fn spawn_loader<F, Fut>(self: &Arc<Self>, run: F) -> JoinHandle<bool>
    where
        F: FnOnce(Arc<Self>) -> Fut,
        Fut: std::future::Future<Output = bool> + Send + 'static,
    {
        tokio::spawn(run(Arc::clone(self)))
    }

    async fn attach_listeners(&self) {
        let page = self.page.read().await;
        let mut listeners = self.listeners.write().await;

        for (element, kind) in FILTER_LISTENERS {
            if page.has(element) {
                listeners.insert((element, kind));
            } else {
                tracing::debug!(element = %element, "Filter control absent, listener skipped");
            }
        }
    }

    /// Deliver a page event
    ///
    /// `DomContentLoaded` completes a deferred boot and returns its loader
    /// handles. Control events update the control's value and re-filter the
    /// course list when a listener is attached for them.
    pub async fn dispatch(self: &Arc<Self>, event: PageEvent) -> Option<LoadHandles> {
        match event {
            PageEvent::DomContentLoaded => {
                self.page.write().await.set_ready_state(ReadyState::Interactive);

                let deferred = *self.boot_state.lock().await == BootState::Deferred;
                if deferred {
                    return self.initialize().await;
                }
                None
            }
            PageEvent::Control {
                target,
                kind,
                value,
            } => {
                if let Err(e) = self.page.write().await.set_value(target, value) {
                    tracing::debug!("Ignoring event: {}", e);
                    return None;
                }

                let listening = self.listeners.read().await.contains(&(target, kind));
                if listening {
                    self.filter_courses().await;
                }
                None
            }
        }
    }

    /// Whether a listener is attached for this control and event kind
    pub async fn has_listener(&self, element: ElementId, kind: EventKind) -> bool {
        self.listeners.read().await.contains(&(element, kind))
    }

    /// Load the stat widgets from the course document
    ///
    /// Failures are logged only; the widgets keep their previous content.
    pub async fn load_stats(&self) -> Result<(), LoadError> {
        let result = self.try_load_stats().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to load stats");
        }
        result
    }

    async fn try_load_stats(&self) -> Result<(), LoadError> {
        let doc: StatsDocument = fetch_document(self.source.as_ref(), COURSES_DOCUMENT).await?;
        let view = StatsView::from(&doc.stats);

        let mut page = self.page.write().await;
        page.set_text(ElementId::TotalCourses, view.total_courses)?;
        page.set_text(ElementId::ActiveStudents, view.active_students)?;
        page.set_text(ElementId::AvgRating, view.avg_rating)?;
        page.set_text(ElementId::TotalRevenue, view.total_revenue)?;

        tracing::info!("Stats loaded");
        Ok(())
    }

    /// Load the course catalogue into the store and render it
    ///
    /// On failure the course list shows "Failed to load courses".
    pub async fn load_courses(&self) -> Result<(), LoadError> {
        let result = self.try_load_courses().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to load courses");
            if let Err(e) = self.show_course_error().await {
                tracing::error!(error = %e, "Failed to show course load error");
            }
        }
        result
    }

    async fn show_course_error(&self) -> Result<(), LoadError> {
        let markup = render_course_error()?;
        self.page
            .write()
            .await
            .set_markup(ElementId::CoursesList, markup)?;
        Ok(())
    }

    async fn try_load_courses(&self) -> Result<(), LoadError> {
        let doc: CatalogueDocument =
            fetch_document(self.source.as_ref(), COURSES_DOCUMENT).await?;

        let mut store = self.store.write().await;
        store.replace(doc.courses);

        let markup = render_courses(store.courses())?;
        self.page
            .write()
            .await
            .set_markup(ElementId::CoursesList, markup)?;

        tracing::info!(active = store.len(), "Courses loaded");
        Ok(())
    }

    /// Load recent enrollments and render the table
    ///
    /// Failures are logged only; the table keeps its previous content.
    pub async fn load_enrollments(&self) -> Result<(), LoadError> {
        let result = self.try_load_enrollments().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to load enrollments");
        }
        result
    }

    async fn try_load_enrollments(&self) -> Result<(), LoadError> {
        let doc: StudentsDocument =
            fetch_document(self.source.as_ref(), STUDENTS_DOCUMENT).await?;

        let markup = render_enrollments(&doc.recent_enrollments)?;
        self.page
            .write()
            .await
            .set_markup(ElementId::EnrollmentsTable, markup)?;

        tracing::info!(count = doc.recent_enrollments.len(), "Enrollments loaded");
        Ok(())
    }

    /// Filter the store by the current control values and re-render
    pub async fn filter_courses(&self) {
        let filter = {
            let page = self.page.read().await;
            CourseFilter::new(
                page.value(ElementId::CourseSearch).unwrap_or(""),
                page.value(ElementId::CategoryFilter).unwrap_or(ALL_CATEGORIES),
            )
        };

        if let Err(e) = self.render_filtered(&filter).await {
            tracing::error!(error = %e, "Failed to render filtered courses");
        }
    }

    async fn render_filtered(&self, filter: &CourseFilter) -> Result<(), LoadError> {
        let markup = self.filtered_markup(filter).await?;
        self.page
            .write()
            .await
            .set_markup(ElementId::CoursesList, markup)?;
        Ok(())
    }

    /// Course list markup for `filter`, without touching the page
    pub async fn filtered_markup(&self, filter: &CourseFilter) -> Result<String, askama::Error> {
        let store = self.store.read().await;
        let courses = store.filter(filter);

        tracing::debug!(
            search = filter.search(),
            category = filter.category.as_str(),
            matched = courses.len(),
            "Filtered courses"
        );

        render_courses(courses)
    }

    /// Courses matching `filter`, cloned out of the store
    pub async fn filtered_courses(&self, filter: &CourseFilter) -> Vec<Course> {
        self.store
            .read()
            .await
            .filter(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Distinct categories of the stored courses
    pub async fn categories(&self) -> Vec<String> {
        self.store.read().await.categories()
    }

    /// Whether a course load has succeeded
    pub async fn is_loaded(&self) -> bool {
        self.store.read().await.is_loaded()
    }

    /// Copy of the current page
    pub async fn page(&self) -> Page {
        self.page.read().await.clone()
    }
}
