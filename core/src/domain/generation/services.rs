use std::sync::Arc;

use futures::{StreamExt, future, stream};
use tokio::sync::watch;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{GenerationConfig, entities::app_errors::CoreError, generate_uuid_v7},
    generation::{
        entities::{GenerationPhase, GenerationView, ImageFailure},
        helpers::apply_image,
    },
    ingredient::IngredientSet,
    recipe::{
        entities::ImageRef,
        helpers::disambiguate_titles,
        ports::{RecipeGenerator, RecipeImageGenerator},
        services::EMPTY_INGREDIENTS_MESSAGE,
    },
};

pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, an unexpected error occurred.";

/// Drives a generation run: one text call, then one image call per recipe.
///
/// State is published through a [`watch`] channel. Text failures end the run
/// with an error; image failures are recorded on the view and otherwise
/// ignored. Starting a new run supersedes any run still in flight, whose
/// late results are dropped.
pub struct GenerationOrchestrator<T, I>
where
    T: RecipeGenerator,
    I: RecipeImageGenerator,
{
    text_generator: Arc<T>,
    image_generator: Arc<I>,
    config: GenerationConfig,
    state: watch::Sender<GenerationView>,
}

impl<T, I> GenerationOrchestrator<T, I>
where
    T: RecipeGenerator,
    I: RecipeImageGenerator,
{
    pub fn new(text_generator: Arc<T>, image_generator: Arc<I>, config: GenerationConfig) -> Self {
        let (state, _) = watch::channel(GenerationView::default());
        Self {
            text_generator,
            image_generator,
            config,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<GenerationView> {
        self.state.subscribe()
    }

    pub fn view(&self) -> GenerationView {
        self.state.borrow().clone()
    }

    /// Runs a full generation for the current contents of `ingredients`.
    ///
    /// Returns the view published when the run settled, or the current view
    /// if a newer run superseded this one.
    #[instrument(skip_all, fields(ingredient_count = ingredients.len()))]
    pub async fn start_generation(&self, ingredients: &IngredientSet) -> GenerationView {
        let run_id = generate_uuid_v7();
        let snapshot = ingredients.snapshot();

        if snapshot.is_empty() {
            tracing::debug!("Refusing to generate recipes without ingredients");
            self.state.send_replace(GenerationView {
                run_id: Some(run_id),
                error: Some(EMPTY_INGREDIENTS_MESSAGE.to_string()),
                ..GenerationView::default()
            });
            return self.view();
        }

        self.state.send_replace(GenerationView {
            run_id: Some(run_id),
            phase: GenerationPhase::GeneratingText,
            ..GenerationView::default()
        });

        let result = self.text_generator.generate_recipes(snapshot).await;
        if !self.is_current(run_id) {
            tracing::info!(%run_id, "Run superseded while generating recipes");
            return self.view();
        }

        let mut recipes = match result {
            Ok(recipes) if recipes.is_empty() => {
                return self.fail(run_id, CoreError::NoUsableRecipes);
            }
            Ok(recipes) => recipes,
            Err(e) => return self.fail(run_id, e),
        };

        let renamed = disambiguate_titles(&mut recipes);
        if renamed > 0 {
            tracing::warn!(renamed, "Text provider returned duplicate recipe titles");
        }

        let titles: Vec<String> = recipes.iter().map(|r| r.title.clone()).collect();
        self.update(run_id, |view| {
            view.phase = GenerationPhase::GeneratingImages;
            view.recipes = Arc::from(recipes);
            true
        });

        self.enrich_images(run_id, titles).await;

        self.update(run_id, |view| {
            view.phase = GenerationPhase::Idle;
            true
        });
        tracing::info!(%run_id, "Generation run finished");

        self.view()
    }

    async fn enrich_images(&self, run_id: Uuid, titles: Vec<String>) {
        let image_timeout = self.config.image_timeout;
        let concurrency = self
            .config
            .image_concurrency
            .unwrap_or(titles.len())
            .max(1);

        let calls = titles.into_iter().map(|title| {
            let image_generator = Arc::clone(&self.image_generator);
            async move {
                if title.trim().is_empty() {
                    let error = CoreError::Validation("recipe has no title".to_string());
                    return (title, Err(error));
                }
                let outcome = tokio::time::timeout(
                    image_timeout,
                    image_generator.generate_image(title.clone()),
                )
                .await
                .unwrap_or_else(|_| {
                    Err(CoreError::ProviderUnavailable(format!(
                        "image generation timed out after {image_timeout:?}"
                    )))
                });
                (title, outcome)
            }
        });

        stream::iter(calls)
            .buffer_unordered(concurrency)
            .for_each(|(title, outcome)| {
                self.apply_image_outcome(run_id, &title, outcome);
                future::ready(())
            })
            .await;
    }

    fn apply_image_outcome(&self, run_id: Uuid, title: &str, outcome: Result<ImageRef, CoreError>) {
        match outcome {
            Ok(image) => {
                let applied = self.update(run_id, |view| {
                    match apply_image(&view.recipes, title, &image) {
                        Some(recipes) => {
                            view.recipes = Arc::from(recipes);
                            true
                        }
                        None => false,
                    }
                });
                if applied {
                    tracing::debug!(title, "Attached generated image");
                }
            }
            Err(error) => {
                tracing::warn!(title, %error, "Failed to generate image for recipe");
                self.update(run_id, |view| {
                    let mut failures = view.image_failures.to_vec();
                    failures.push(ImageFailure {
                        title: title.to_string(),
                        message: error.to_string(),
                    });
                    view.image_failures = Arc::from(failures);
                    true
                });
            }
        }
    }

    fn fail(&self, run_id: Uuid, error: CoreError) -> GenerationView {
        tracing::error!(%run_id, %error, "Recipe generation failed");
        let message = match error.to_string() {
            message if message.trim().is_empty() => GENERIC_ERROR_MESSAGE.to_string(),
            message => message,
        };
        self.update(run_id, |view| {
            *view = GenerationView {
                run_id: Some(run_id),
                error: Some(message),
                ..GenerationView::default()
            };
            true
        });
        self.view()
    }

    fn is_current(&self, run_id: Uuid) -> bool {
        self.state.borrow().run_id == Some(run_id)
    }

    /// Applies `modify` to the published view if `run_id` is still the current run.
    fn update(&self, run_id: Uuid, modify: impl FnOnce(&mut GenerationView) -> bool) -> bool {
        self.state.send_if_modified(|view| {
            if view.run_id != Some(run_id) {
                return false;
            }
            modify(view)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use tokio::sync::Notify;

    use super::*;
    use crate::domain::{
        common::services::Service,
        recipe::{
            entities::{Recipe, RecipeBatch},
            ports::{MockLLMClient, MockRecipeGenerator, MockRecipeImageGenerator},
        },
    };

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.to_string(),
            description: format!("A dish called {title}"),
            prep_time: "10 minutes".to_string(),
            cook_time: "20 minutes".to_string(),
            ingredients: vec!["1 chicken breast".to_string(), "1 cup rice".to_string()],
            instructions: vec!["Cook everything.".to_string()],
            image_url: None,
        }
    }

    fn batch(titles: &[&str]) -> RecipeBatch {
        titles.iter().map(|t| recipe(t)).collect()
    }

    /// Answers by the first ingredient of the request.
    #[derive(Default)]
    struct FakeTextGenerator {
        batches: HashMap<String, Result<RecipeBatch, CoreError>>,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
    }

    impl FakeTextGenerator {
        fn with(mut self, first_ingredient: &str, result: Result<RecipeBatch, CoreError>) -> Self {
            self.batches.insert(first_ingredient.to_string(), result);
            self
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RecipeGenerator for FakeTextGenerator {
        async fn generate_recipes(
            &self,
            ingredients: Vec<String>,
        ) -> Result<RecipeBatch, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.batches
                .get(&ingredients[0])
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Image generator whose per-title outcome, latency and release can be scripted.
    #[derive(Default)]
    struct FakeImageGenerator {
        failures: HashMap<String, CoreError>,
        delays: HashMap<String, Duration>,
        gates: HashMap<String, Arc<Notify>>,
        calls: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl FakeImageGenerator {
        fn failing(mut self, title: &str, error: CoreError) -> Self {
            self.failures.insert(title.to_string(), error);
            self
        }

        fn delayed(mut self, title: &str, delay: Duration) -> Self {
            self.delays.insert(title.to_string(), delay);
            self
        }

        fn gated(mut self, title: &str, gate: Arc<Notify>) -> Self {
            self.gates.insert(title.to_string(), gate);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn image_for(title: &str) -> ImageRef {
            ImageRef::data_uri("image/jpeg", &title.replace(' ', "_"))
        }
    }

    impl RecipeImageGenerator for FakeImageGenerator {
        async fn generate_image(&self, title: String) -> Result<ImageRef, CoreError> {
            self.calls.lock().unwrap().push(title.clone());
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if let Some(gate) = self.gates.get(&title) {
                gate.notified().await;
            }
            if let Some(delay) = self.delays.get(&title) {
                tokio::time::sleep(*delay).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            match self.failures.get(&title) {
                Some(error) => Err(error.clone()),
                None => Ok(Self::image_for(&title)),
            }
        }
    }

    fn orchestrator(
        text: FakeTextGenerator,
        images: FakeImageGenerator,
        config: GenerationConfig,
    ) -> (
        Arc<GenerationOrchestrator<FakeTextGenerator, FakeImageGenerator>>,
        Arc<FakeTextGenerator>,
        Arc<FakeImageGenerator>,
    ) {
        let text = Arc::new(text);
        let images = Arc::new(images);
        let orchestrator = Arc::new(GenerationOrchestrator::new(
            Arc::clone(&text),
            Arc::clone(&images),
            config,
        ));
        (orchestrator, text, images)
    }

    fn ingredients(items: &[&str]) -> IngredientSet {
        items.iter().copied().collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_partial_image_failure_regardless_of_completion_order() {
        let orders = [[30, 20, 10], [10, 20, 30], [20, 10, 30]];

        for [a, b, c] in orders {
            let text = FakeTextGenerator::default()
                .with("chicken breast", Ok(batch(&["A", "B", "C"])));
            let images = FakeImageGenerator::default()
                .delayed("A", Duration::from_millis(a))
                .delayed("B", Duration::from_millis(b))
                .delayed("C", Duration::from_millis(c))
                .failing("B", CoreError::ProviderUnavailable("boom".to_string()));
            let (orchestrator, text, images) =
                orchestrator(text, images, GenerationConfig::default());

            let view = orchestrator
                .start_generation(&ingredients(&["chicken breast", "rice", "broccoli"]))
                .await;

            assert_eq!(text.calls(), 1);
            assert_eq!(images.calls().len(), 3);
            assert_eq!(view.phase, GenerationPhase::Idle);
            assert_eq!(view.error, None);
            assert_eq!(view.recipes.len(), 3);
            assert_eq!(
                view.recipe("A").unwrap().image_url.as_deref(),
                Some(FakeImageGenerator::image_for("A").as_str())
            );
            assert_eq!(view.recipe("B").unwrap().image_url, None);
            assert_eq!(
                view.recipe("C").unwrap().image_url.as_deref(),
                Some(FakeImageGenerator::image_for("C").as_str())
            );
            assert_eq!(view.image_failures.len(), 1);
            assert_eq!(view.image_failures[0].title, "B");
            assert_eq!(view.image_failures[0].message, "boom");
        }
    }

    #[tokio::test]
    async fn test_empty_ingredients_never_reach_providers() {
        let (orchestrator, text, images) = orchestrator(
            FakeTextGenerator::default(),
            FakeImageGenerator::default(),
            GenerationConfig::default(),
        );

        let view = orchestrator.start_generation(&IngredientSet::new()).await;

        assert_eq!(text.calls(), 0);
        assert!(images.calls().is_empty());
        assert!(view.recipes.is_empty());
        assert_eq!(view.phase, GenerationPhase::Idle);
        assert_eq!(view.error.as_deref(), Some(EMPTY_INGREDIENTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_text_failure_is_fatal_and_skips_images() {
        let text = FakeTextGenerator::default().with(
            "rice",
            Err(CoreError::SchemaViolation("recipe 1: missing field `title`".to_string())),
        );
        let (orchestrator, _, images) =
            orchestrator(text, FakeImageGenerator::default(), GenerationConfig::default());

        let view = orchestrator.start_generation(&ingredients(&["rice"])).await;

        assert!(images.calls().is_empty());
        assert!(view.recipes.is_empty());
        assert_eq!(view.phase, GenerationPhase::Idle);
        assert_eq!(
            view.error,
            Some(
                CoreError::SchemaViolation("recipe 1: missing field `title`".to_string())
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_error_without_message_falls_back_to_generic() {
        let text = FakeTextGenerator::default()
            .with("rice", Err(CoreError::ProviderUnavailable(String::new())));
        let (orchestrator, _, _) =
            orchestrator(text, FakeImageGenerator::default(), GenerationConfig::default());

        let view = orchestrator.start_generation(&ingredients(&["rice"])).await;

        assert_eq!(view.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_empty_batch_is_reported() {
        let text = FakeTextGenerator::default().with("rice", Ok(Vec::new()));
        let (orchestrator, _, images) =
            orchestrator(text, FakeImageGenerator::default(), GenerationConfig::default());

        let view = orchestrator.start_generation(&ingredients(&["rice"])).await;

        assert!(images.calls().is_empty());
        assert!(view.recipes.is_empty());
        assert_eq!(view.error, Some(CoreError::NoUsableRecipes.to_string()));
    }

    #[tokio::test]
    async fn test_prose_response_surfaces_malformed_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async { Ok("I would suggest a lovely chicken stir-fry!".to_string()) })
        });
        llm.expect_generate_images().never();

        let service = Arc::new(Service::new(llm, GenerationConfig::default()));
        let orchestrator = GenerationOrchestrator::new(
            Arc::clone(&service),
            Arc::clone(&service),
            GenerationConfig::default(),
        );

        let view = orchestrator
            .start_generation(&ingredients(&["chicken breast"]))
            .await;

        assert!(view.recipes.is_empty());
        assert_eq!(view.error, Some(CoreError::MalformedResponse.to_string()));
        assert_ne!(view.error, Some(CoreError::EmptyResponse.to_string()));
    }

    #[tokio::test]
    async fn test_recipes_are_published_before_images() {
        let gate = Arc::new(Notify::new());
        let text = FakeTextGenerator::default().with("rice", Ok(batch(&["A", "B"])));
        let images = FakeImageGenerator::default()
            .gated("A", Arc::clone(&gate))
            .gated("B", Arc::clone(&gate));
        let (orchestrator, _, _) = orchestrator(text, images, GenerationConfig::default());

        let mut receiver = orchestrator.subscribe();
        let run = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.start_generation(&ingredients(&["rice"])).await }
        });

        let pending = receiver
            .wait_for(|view| view.phase == GenerationPhase::GeneratingImages)
            .await
            .unwrap()
            .clone();
        assert!(!pending.is_loading_text());
        assert!(pending.is_loading_images());
        assert_eq!(pending.recipes.len(), 2);
        assert!(pending.recipes.iter().all(|r| !r.has_image()));
        assert_eq!(pending.error, None);

        gate.notify_one();
        gate.notify_one();
        let view = run.await.unwrap();

        assert_eq!(view.phase, GenerationPhase::Idle);
        assert!(view.recipes.iter().all(|r| r.has_image()));
        // snapshots handed out earlier are never written into
        assert!(pending.recipes.iter().all(|r| !r.has_image()));
    }

    #[tokio::test]
    async fn test_empty_run_supersedes_pending_text_generation() {
        let gate = Arc::new(Notify::new());
        let text = FakeTextGenerator::default()
            .with("rice", Ok(batch(&["Pilaf"])))
            .gated(Arc::clone(&gate));
        let (orchestrator, text, images) =
            orchestrator(text, FakeImageGenerator::default(), GenerationConfig::default());

        let mut receiver = orchestrator.subscribe();
        let pending_run = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.start_generation(&ingredients(&["rice"])).await }
        });
        receiver
            .wait_for(|view| view.is_loading_text())
            .await
            .unwrap();

        let empty = orchestrator.start_generation(&IngredientSet::new()).await;
        assert_eq!(empty.error.as_deref(), Some(EMPTY_INGREDIENTS_MESSAGE));

        gate.notify_one();
        pending_run.await.unwrap();

        let view = orchestrator.view();
        assert_eq!(view.run_id, empty.run_id);
        assert_eq!(view.phase, GenerationPhase::Idle);
        assert!(view.recipes.is_empty());
        assert!(view.image_failures.is_empty());
        assert_eq!(view.error.as_deref(), Some(EMPTY_INGREDIENTS_MESSAGE));
        assert_eq!(text.calls(), 1);
        assert!(images.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ports_receive_normalized_snapshot_and_each_title() {
        let mut text = MockRecipeGenerator::new();
        text.expect_generate_recipes()
            .withf(|ingredients| ingredients.as_slice() == ["chicken breast", "rice"])
            .times(1)
            .returning(|_| Box::pin(async { Ok(batch(&["A", "B"])) }));

        let mut images = MockRecipeImageGenerator::new();
        images
            .expect_generate_image()
            .withf(|title| title == "A")
            .times(1)
            .returning(|_| Box::pin(async { Ok(ImageRef::new("https://img.test/a.jpg")) }));
        images
            .expect_generate_image()
            .withf(|title| title == "B")
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::NoImageProduced) }));

        let orchestrator = GenerationOrchestrator::new(
            Arc::new(text),
            Arc::new(images),
            GenerationConfig::default(),
        );

        let view = orchestrator
            .start_generation(&ingredients(&["Chicken Breast", " rice ", "chicken breast"]))
            .await;

        assert_eq!(view.error, None);
        assert_eq!(
            view.recipe("A").unwrap().image_url.as_deref(),
            Some("https://img.test/a.jpg")
        );
        assert!(!view.recipe("B").unwrap().has_image());
        assert_eq!(view.image_failures.len(), 1);
        assert_eq!(
            view.image_failures[0].message,
            CoreError::NoImageProduced.to_string()
        );
    }

    #[tokio::test]
    async fn test_superseded_run_does_not_overwrite_newer_results() {
        let gate = Arc::new(Notify::new());
        let text = FakeTextGenerator::default()
            .with("rice", Ok(batch(&["Old"])))
            .with("beans", Ok(batch(&["New"])));
        let images = FakeImageGenerator::default().gated("Old", Arc::clone(&gate));
        let (orchestrator, _, images) = orchestrator(text, images, GenerationConfig::default());

        let mut receiver = orchestrator.subscribe();
        let stale_run = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.start_generation(&ingredients(&["rice"])).await }
        });
        receiver
            .wait_for(|view| view.phase == GenerationPhase::GeneratingImages)
            .await
            .unwrap();

        let fresh = orchestrator.start_generation(&ingredients(&["beans"])).await;
        assert_eq!(fresh.phase, GenerationPhase::Idle);

        gate.notify_one();
        stale_run.await.unwrap();

        let view = orchestrator.view();
        assert_eq!(view.run_id, fresh.run_id);
        assert_eq!(view.phase, GenerationPhase::Idle);
        assert_eq!(view.recipes.len(), 1);
        assert_eq!(view.recipes[0].title, "New");
        assert!(view.recipes[0].has_image());
        assert!(view.recipe("Old").is_none());
        assert_eq!(images.calls(), vec!["Old".to_string(), "New".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_image_times_out_without_failing_the_run() {
        let text = FakeTextGenerator::default().with("rice", Ok(batch(&["Slow", "Fast"])));
        let images = FakeImageGenerator::default().delayed("Slow", Duration::from_secs(600));
        let config = GenerationConfig {
            image_timeout: Duration::from_secs(5),
            ..GenerationConfig::default()
        };
        let (orchestrator, _, _) = orchestrator(text, images, config);

        let view = orchestrator.start_generation(&ingredients(&["rice"])).await;

        assert_eq!(view.error, None);
        assert_eq!(view.phase, GenerationPhase::Idle);
        assert!(!view.recipe("Slow").unwrap().has_image());
        assert!(view.recipe("Fast").unwrap().has_image());
        assert_eq!(view.image_failures.len(), 1);
        assert!(view.image_failures[0].message.contains("timed out"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_image_concurrency_cap() {
        let titles = ["A", "B", "C", "D", "E"];
        let text = FakeTextGenerator::default().with("rice", Ok(batch(&titles)));
        let images = titles.iter().fold(FakeImageGenerator::default(), |images, title| {
            images.delayed(title, Duration::from_millis(50))
        });
        let config = GenerationConfig {
            image_concurrency: Some(2),
            ..GenerationConfig::default()
        };
        let (orchestrator, _, images) = orchestrator(text, images, config);

        let view = orchestrator.start_generation(&ingredients(&["rice"])).await;

        assert!(view.recipes.iter().all(|r| r.has_image()));
        assert_eq!(images.calls().len(), 5);
        assert_eq!(images.max_in_flight.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_fan_out_issues_all_calls_at_once() {
        let titles = ["A", "B", "C"];
        let text = FakeTextGenerator::default().with("rice", Ok(batch(&titles)));
        let images = titles.iter().fold(FakeImageGenerator::default(), |images, title| {
            images.delayed(title, Duration::from_millis(50))
        });
        let (orchestrator, _, images) =
            orchestrator(text, images, GenerationConfig::default());

        orchestrator.start_generation(&ingredients(&["rice"])).await;

        assert_eq!(images.max_in_flight.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_duplicate_titles_are_disambiguated() {
        let text = FakeTextGenerator::default().with("rice", Ok(batch(&["Pilaf", "Pilaf"])));
        let (orchestrator, _, images) =
            orchestrator(text, FakeImageGenerator::default(), GenerationConfig::default());

        let view = orchestrator.start_generation(&ingredients(&["rice"])).await;

        let mut calls = images.calls();
        calls.sort();
        assert_eq!(calls, vec!["Pilaf".to_string(), "Pilaf (2)".to_string()]);
        assert_eq!(view.recipes[0].title, "Pilaf");
        assert_eq!(view.recipes[1].title, "Pilaf (2)");
        assert_ne!(view.recipes[0].image_url, view.recipes[1].image_url);
        assert!(view.recipes.iter().all(|r| r.has_image()));
    }

    #[tokio::test]
    async fn test_new_run_clears_previous_results() {
        let text = FakeTextGenerator::default()
            .with("rice", Ok(batch(&["A"])))
            .with("beans", Err(CoreError::EmptyResponse));
        let (orchestrator, _, _) =
            orchestrator(text, FakeImageGenerator::default(), GenerationConfig::default());

        let first = orchestrator.start_generation(&ingredients(&["rice"])).await;
        assert_eq!(first.recipes.len(), 1);

        let second = orchestrator.start_generation(&ingredients(&["beans"])).await;
        assert!(second.recipes.is_empty());
        assert_eq!(second.error, Some(CoreError::EmptyResponse.to_string()));
        assert_ne!(first.run_id, second.run_id);
    }
}
