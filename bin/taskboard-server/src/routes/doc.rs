use crate::routes::health::HealthApi;
use crate::routes::tasks::TasksApi;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "taskboard-server",
    description = "In-memory task store with a REST interface",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(HealthApi::openapi());
    root.merge(TasksApi::openapi());
    root
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn document_lists_task_paths() {
        let doc = get_docs();
        assert!(doc.paths.paths.contains_key("/tasks"));
        assert!(doc.paths.paths.contains_key("/tasks/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
