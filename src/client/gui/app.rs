use iced::{Application, Command, Element, Length, Theme};
use iced::widget::{image, Column};
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use crate::client::config::ClientConfig;
use crate::client::gui::views::home::{self, Photos};
use crate::client::gui::widgets::top_bar;
use crate::client::models::app_state::{AmphibiansViewModel, FetchOutcome};
use crate::client::models::messages::Message;
use crate::client::models::ui_state::{ExpandedCards, UiState};
use crate::client::services::api_service::AmphibiansApiService;
use crate::client::services::repository::{AmphibiansRepository, NetworkAmphibiansRepository};

pub struct AmphibiansApp {
    pub config: ClientConfig,
    api: AmphibiansApiService,
    view_model: AmphibiansViewModel,
    // View-local state, not part of UiState
    expanded: ExpandedCards,
    photos: Photos,
}

impl AmphibiansApp {
    /// Builds the app around an arbitrary repository; photos still go through `api`.
    ///
    /// The returned command is the first load.
    pub fn with_repository(
        config: ClientConfig,
        api: AmphibiansApiService,
        repository: Arc<dyn AmphibiansRepository>,
    ) -> (Self, Command<Message>) {
        let (app, first_load) = Self::starting(config, api, repository);
        (app, Command::perform(first_load, Message::AmphibiansLoaded))
    }

    /// Constructs the app in `Loading` and hands back the first fetch.
    fn starting(
        config: ClientConfig,
        api: AmphibiansApiService,
        repository: Arc<dyn AmphibiansRepository>,
    ) -> (Self, impl Future<Output = FetchOutcome> + Send + 'static) {
        let mut app = Self {
            config,
            api,
            view_model: AmphibiansViewModel::new(repository),
            expanded: ExpandedCards::default(),
            photos: Photos::new(),
        };
        let first_load = app.view_model.refresh();
        (app, first_load)
    }

    pub fn ui_state(&self) -> &UiState {
        self.view_model.ui_state()
    }

    pub fn expanded(&self) -> &ExpandedCards {
        &self.expanded
    }

    pub fn photos(&self) -> &Photos {
        &self.photos
    }

    fn refresh(&mut self) -> Command<Message> {
        Command::perform(self.view_model.refresh(), Message::AmphibiansLoaded)
    }

    /// Distinct, non-empty photo urls of the current list, in list order.
    pub fn photo_urls(&self) -> Vec<String> {
        let UiState::Success(amphibians) = self.view_model.ui_state() else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        amphibians
            .iter()
            .map(|a| a.img_src.clone())
            .filter(|url| !url.is_empty() && seen.insert(url.clone()))
            .collect()
    }

    fn load_photos(&self) -> Command<Message> {
        let commands: Vec<Command<Message>> = self
            .photo_urls()
            .into_iter()
            .map(|url| {
                let api = self.api.clone();
                Command::perform(
                    async move {
                        let bytes = api.get_image(&url).await.ok();
                        (url, bytes)
                    },
                    |(url, bytes)| Message::PhotoLoaded { url, bytes },
                )
            })
            .collect();
        Command::batch(commands)
    }
}

impl Application for AmphibiansApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        let api = AmphibiansApiService::new(config.base_url.clone());
        let repository = Arc::new(NetworkAmphibiansRepository::new(api.clone()));
        AmphibiansApp::with_repository(config, api, repository)
    }

    fn title(&self) -> String {
        self.config.window_title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Refresh => self.refresh(),
            Message::AmphibiansLoaded(outcome) => {
                self.view_model.apply(outcome);
                self.expanded.reset();
                self.photos.clear();
                self.load_photos()
            }
            Message::ToggleCard(position) => {
                self.expanded.toggle(position);
                Command::none()
            }
            Message::PhotoLoaded { url, bytes } => {
                // Failed photos keep their placeholder; photos of a replaced list are dropped.
                if let Some(bytes) = bytes {
                    if self.photo_urls().contains(&url) {
                        self.photos.insert(url, image::Handle::from_memory(bytes));
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Column::new()
            .push(top_bar::view(&self.config.window_title))
            .push(home::view(self.view_model.ui_state(), &self.expanded, &self.photos))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
