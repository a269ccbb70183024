use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;

use scaffold_gen::assist::{AssistConfig, GenerativeAssist};
use scaffold_gen::model::{Database, Feature, FrameworkKind, GeneratedFile, ProjectConfig};
use scaffold_gen::profiles::profile_for;

const ALL_KINDS: [FrameworkKind; 4] = [
    FrameworkKind::Django,
    FrameworkKind::FastApi,
    FrameworkKind::Flask,
    FrameworkKind::React,
];

fn sample_config(framework: FrameworkKind) -> ProjectConfig {
    ProjectConfig {
        framework,
        database: Database::Postgres,
        styling: "Plain CSS".to_string(),
        features: BTreeSet::from([Feature::Docker]),
        description: "An e-commerce API with products, orders, and customer management"
            .to_string(),
        entities: vec![
            "product".to_string(),
            "order".to_string(),
            "customer".to_string(),
        ],
    }
}

/// Assist instance pointing at a closed local port: configured, but every
/// call fails without touching the network.
fn failing_assist() -> GenerativeAssist {
    let mut config = AssistConfig::with_api_key("sk-test");
    config.endpoint = "http://127.0.0.1:9/v1/completions".to_string();
    config.timeout = Duration::from_millis(200);
    GenerativeAssist::new(config).expect("assist client")
}

fn file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a GeneratedFile {
    files
        .iter()
        .find(|file| file.path == Path::new(path))
        .unwrap_or_else(|| panic!("missing generated file {path}"))
}

#[tokio::test]
async fn template_path_is_deterministic() {
    for kind in ALL_KINDS {
        let config = sample_config(kind);
        let profile = profile_for(kind);
        let first = profile.generate("shop-api", &config, None).await;
        let second = profile.generate("shop-api", &config, None).await;
        assert_eq!(first.files, second.files, "profile {kind} not deterministic");
        assert!(first.warnings.is_empty());
    }
}

#[tokio::test]
async fn failed_assist_falls_back_to_identical_template_output() {
    let assist = failing_assist();
    for kind in ALL_KINDS {
        let config = sample_config(kind);
        let profile = profile_for(kind);
        let with_assist = profile.generate("shop-api", &config, Some(&assist)).await;
        let without = profile.generate("shop-api", &config, None).await;

        assert_eq!(
            with_assist.files, without.files,
            "profile {kind} fallback output differs"
        );
        // one fallback warning per entity code unit
        assert_eq!(with_assist.warnings.len(), config.entities.len());
    }
}

#[tokio::test]
async fn django_profile_emits_entity_units_and_pluralized_routes() {
    let config = sample_config(FrameworkKind::Django);
    let output = profile_for(FrameworkKind::Django)
        .generate("shop-api", &config, None)
        .await;

    let models = file(&output.files, "api/models.py");
    assert!(models.contents.contains("class Product(models.Model):"));
    assert!(models.contents.contains("class Order(models.Model):"));
    assert!(models.contents.contains("class Customer(models.Model):"));

    let urls = file(&output.files, "api/urls.py");
    assert!(urls.contents.contains("router.register(r'products', ProductViewSet)"));
    assert!(urls.contents.contains("router.register(r'orders', OrderViewSet)"));
    assert!(urls.contents.contains("router.register(r'customers', CustomerViewSet)"));

    let settings = file(&output.files, "config/settings.py");
    assert!(settings.contents.contains("django.db.backends.postgresql"));

    // docker feature toggles container files
    file(&output.files, "Dockerfile");
    file(&output.files, "docker-compose.yml");

    let requirements = file(&output.files, "requirements.txt");
    assert!(requirements.contents.contains("psycopg2-binary"));
    assert!(requirements.contents.contains("gunicorn"));

    let readme = file(&output.files, "README.md");
    assert!(readme.contents.contains("/api/products/"));
}

#[tokio::test]
async fn fastapi_profile_emits_layered_skeleton_and_crud_endpoints() {
    let config = sample_config(FrameworkKind::FastApi);
    let output = profile_for(FrameworkKind::FastApi)
        .generate("shop-api", &config, None)
        .await;

    file(&output.files, "app/api/routes/__init__.py");
    file(&output.files, "tests/integration/__init__.py");

    let main = file(&output.files, "main.py");
    assert!(main.contents.contains("@app.get(\"/api/products\""));
    assert!(main.contents.contains("def create_order(item: OrderCreate):"));
    assert!(main.contents.contains("\"Sample Customer 1\""));
    assert!(main.contents.contains("@app.get(\"/health\")"));

    // SQL database selected, so the ORM units are present
    let orm = file(&output.files, "models.py");
    assert!(orm.contents.contains("__tablename__ = \"products\""));
    file(&output.files, "database.py");
}

#[tokio::test]
async fn fastapi_profile_skips_orm_units_for_mongodb() {
    let mut config = sample_config(FrameworkKind::FastApi);
    config.database = Database::MongoDb;
    let output = profile_for(FrameworkKind::FastApi)
        .generate("shop-api", &config, None)
        .await;

    assert!(
        !output.files.iter().any(|f| f.path == Path::new("models.py")),
        "mongodb scaffold must not carry sqlalchemy models"
    );
    let requirements = file(&output.files, "requirements.txt");
    assert!(requirements.contents.contains("motor"));
}

#[tokio::test]
async fn flask_profile_emits_resources_and_registrations() {
    let config = sample_config(FrameworkKind::Flask);
    let output = profile_for(FrameworkKind::Flask)
        .generate("shop-api", &config, None)
        .await;

    let app = file(&output.files, "app.py");
    assert!(app.contents.contains("class ProductList(Resource):"));
    assert!(app.contents.contains("class CustomerDetail(Resource):"));
    assert!(
        app.contents
            .contains("api.add_resource(OrderList, '/api/orders')")
    );
    assert!(
        app.contents
            .contains("api.add_resource(OrderDetail, '/api/orders/<int:order_id>')")
    );
}

#[tokio::test]
async fn react_profile_emits_one_feature_module_per_entity() {
    let config = sample_config(FrameworkKind::React);
    let output = profile_for(FrameworkKind::React)
        .generate("shop-spa", &config, None)
        .await;

    for entity in ["product", "order", "customer"] {
        file(&output.files, &format!("src/features/{entity}/api.js"));
    }
    let component = file(&output.files, "src/features/product/ProductList.jsx");
    assert!(component.contents.contains("export default function ProductList()"));

    let app = file(&output.files, "src/App.jsx");
    assert!(app.contents.contains("<ProductList />"));
    assert!(app.contents.contains("<CustomerList />"));

    let package = file(&output.files, "package.json");
    assert!(package.contents.contains("\"name\": \"shop-spa\""));

    // SPA scaffold has no server-side counterpart
    assert!(
        !output
            .files
            .iter()
            .any(|f| f.path == Path::new("requirements.txt"))
    );
}

#[tokio::test]
async fn route_segments_use_english_pluralization() {
    let mut config = sample_config(FrameworkKind::React);
    config.entities = vec!["category".to_string()];
    let output = profile_for(FrameworkKind::React)
        .generate("catalog", &config, None)
        .await;

    let api = file(&output.files, "src/features/category/api.js");
    assert!(api.contents.contains("const BASE_URL = '/api/categories'"));
    assert!(api.contents.contains("export async function listCategories()"));
}
