//! Builder flow: eleven form fields in, RenderCV YAML text out.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Form,
};
use tracing::warn;

use crate::llm::ModelTier;
use crate::prompts::{render_builder_prompt, BuilderInput};
use crate::routes::flash_redirect;
use crate::routes::views::{self, FlashQuery};
use crate::state::AppState;

/// GET /builder
pub async fn builder_form(Query(query): Query<FlashQuery>) -> Response {
    views::builder_page(&views::flash_banner(&query), None).into_response()
}

/// POST /builder
///
/// Fields are passed through without validation, empty values included. The
/// builder always uses the Flash tier; the returned text is displayed as-is
/// (escaped), whether or not it is valid YAML.
pub async fn submit_builder(
    State(state): State<AppState>,
    Form(input): Form<BuilderInput>,
) -> Response {
    let prompt = render_builder_prompt(&input);

    match state.llm.generate(ModelTier::Flash, &prompt).await {
        Ok(yaml) => views::builder_page("", Some(&yaml)).into_response(),
        Err(e) => {
            warn!("builder generation failed: {e}");
            flash_redirect("/builder", "danger", &format!("Error generating resume: {e}"))
                .into_response()
        }
    }
}
