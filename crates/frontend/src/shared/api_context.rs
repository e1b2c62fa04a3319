use contracts::shared::config::ConsoleConfig;
use contracts::shared::request_context::RequestContext;
use contracts::system::auth::LoginResponse;
use leptos::prelude::*;

/// Контекст запросов, общий для всех страниц консоли.
#[derive(Clone, Copy)]
pub struct ApiContext {
    pub request: RwSignal<RequestContext>,
}

impl ApiContext {
    /// Текущий контекст для построения запроса
    pub fn get(&self) -> RequestContext {
        self.request.get()
    }

    /// После входа / выхода администратора
    pub fn set_token(&self, token: Option<String>) {
        self.request.update(|ctx| *ctx = ctx.with_token(token));
    }

    /// Токен из успешного ответа входа
    pub fn sign_in(&self, response: &LoginResponse) {
        self.set_token(Some(response.token.clone()));
    }

    pub fn sign_out(&self) {
        self.set_token(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.request.with(|ctx| ctx.is_authenticated())
    }
}

/// Конфигурация консоли; при ошибке разбора остаются значения по умолчанию.
pub fn load_console_config(override_toml: Option<&str>) -> ConsoleConfig {
    match ConsoleConfig::load(override_toml) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid console config, using defaults: {:#}", e);
            ConsoleConfig::default()
        }
    }
}

pub fn provide_request_context(ctx: RequestContext) -> ApiContext {
    let context = ApiContext {
        request: RwSignal::new(ctx),
    };
    provide_context(context);
    context
}

/// Hook to use the request context.
pub fn use_request_context() -> ApiContext {
    expect_context::<ApiContext>()
}
