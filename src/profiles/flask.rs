//! Flask profile: single-module micro-REST scaffold with one
//! Flask-RESTful resource pair (list + detail) per entity over seeded
//! in-memory data.

use super::{FrameworkProfile, ProfileOutput, assisted_unit, entity_prompt};
use crate::assist::GenerativeAssist;
use crate::inflect::{capitalize, pluralize};
use crate::model::{Database, Feature, FrameworkKind, GeneratedFile, ProjectConfig};
use async_trait::async_trait;

pub struct FlaskProfile;

#[async_trait]
impl FrameworkProfile for FlaskProfile {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::Flask
    }

    async fn generate(
        &self,
        project: &str,
        config: &ProjectConfig,
        assist: Option<&GenerativeAssist>,
    ) -> ProfileOutput {
        let mut warnings = Vec::new();

        let mut resource_blocks = Vec::with_capacity(config.entities.len());
        for entity in &config.entities {
            let prompt = entity_prompt(self.kind(), "Flask resource section", entity, config);
            let block = assisted_unit(
                assist,
                prompt,
                resource_block(entity),
                &format!("flask resources `{entity}`"),
                &mut warnings,
            )
            .await;
            resource_blocks.push(block);
        }

        let files = vec![
            GeneratedFile::new("requirements.txt", requirements(config)),
            GeneratedFile::new("README.md", readme(project, config)),
            GeneratedFile::new("app.py", app_module(project, config, &resource_blocks)),
            GeneratedFile::new(".env", ENV_FILE),
            GeneratedFile::new(".gitignore", GITIGNORE),
        ];

        ProfileOutput { files, warnings }
    }
}

fn requirements(config: &ProjectConfig) -> String {
    let mut lines = vec![
        format!("Flask=={}", FrameworkKind::Flask.default_version()),
        "Flask-RESTful==0.3.10".to_string(),
        "python-decouple==3.8".to_string(),
    ];

    match config.database {
        Database::Postgres => {
            lines.push("psycopg2-binary==2.9.9".to_string());
            lines.push("Flask-SQLAlchemy==3.1.1".to_string());
        }
        Database::MySql => {
            lines.push("mysqlclient==2.2.0".to_string());
            lines.push("Flask-SQLAlchemy==3.1.1".to_string());
        }
        Database::MongoDb => {
            lines.push("Flask-PyMongo==2.3.0".to_string());
            lines.push("pymongo==4.6.0".to_string());
        }
        Database::Sqlite => {}
    }

    if config.has_feature(Feature::Auth) {
        lines.push("Flask-JWT-Extended==4.5.3".to_string());
    }

    lines.join("\n") + "\n"
}

fn readme(project: &str, config: &ProjectConfig) -> String {
    let mut out = format!("# {project}\n\n{}\n\n", config.description.trim());
    out.push_str(&format!(
        "## Framework\n\n- Flask {}\n- Database: {}\n\n",
        FrameworkKind::Flask.default_version(),
        config.database.label()
    ));

    out.push_str("## Detected Entities\n\n");
    for entity in &config.entities {
        out.push_str(&format!(
            "- **{}**: REST API at `/api/{}`\n",
            capitalize(entity),
            pluralize(entity)
        ));
    }

    if !config.features.is_empty() {
        out.push_str("\n## Features\n\n");
        for feature in &config.features {
            out.push_str(&format!("- {}\n", feature.label()));
        }
    }

    out.push_str(
        "\n## Setup\n\n\
         ```bash\n\
         python -m venv venv\n\
         source venv/bin/activate\n\
         pip install -r requirements.txt\n\
         python app.py\n\
         ```\n",
    );
    out
}

fn app_module(project: &str, config: &ProjectConfig, resource_blocks: &[String]) -> String {
    let mut out = String::from(
        "from flask import Flask, jsonify\n\
         from flask_restful import Api, Resource\n\
         from decouple import config\n\
         \n\
         app = Flask(__name__)\n\
         app.config['SECRET_KEY'] = config('SECRET_KEY', default='dev-secret-key-change-in-production')\n\
         app.config['DEBUG'] = config('DEBUG', default=True, cast=bool)\n\
         \n\
         api = Api(app)\n",
    );

    for block in resource_blocks {
        out.push_str("\n\n");
        out.push_str(block);
    }

    let endpoints_list = config
        .entities
        .iter()
        .flat_map(|entity| {
            let plural = pluralize(entity);
            [
                format!("'/api/{plural}'"),
                format!("'/api/{plural}/<int:{entity}_id>'"),
            ]
        })
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&format!(
        "\n\n@app.route('/')\n\
         def index():\n\
         \x20   return jsonify({{\n\
         \x20       'message': 'Welcome to {project} API',\n\
         \x20       'endpoints': [{endpoints_list}]\n\
         \x20   }})\n\
         \n\
         \n\
         @app.route('/health')\n\
         def health():\n\
         \x20   return jsonify({{'status': 'healthy'}}), 200\n\
         \n\
         \n"
    ));

    for entity in &config.entities {
        let class = capitalize(entity);
        let plural = pluralize(entity);
        out.push_str(&format!(
            "api.add_resource({class}List, '/api/{plural}')\n\
             api.add_resource({class}Detail, '/api/{plural}/<int:{entity}_id>')\n"
        ));
    }

    out.push_str(
        "\n\nif __name__ == '__main__':\n\
         \x20   app.run(\n\
         \x20       host=config('HOST', default='0.0.0.0'),\n\
         \x20       port=config('PORT', default=5000, cast=int),\n\
         \x20       debug=config('DEBUG', default=True, cast=bool)\n\
         \x20   )\n",
    );
    out
}

/// Seeded data store plus list/detail resources for one entity; the
/// per-entity code unit offered to the assist service.
fn resource_block(entity: &str) -> String {
    let class = capitalize(entity);
    let plural = pluralize(entity);
    format!(
        "# {class} data store (replace with a database in production)\n\
         {entity}_data = [\n\
         \x20   {{'id': 1, 'name': 'Sample {class} 1', 'description': 'First sample {entity}'}},\n\
         \x20   {{'id': 2, 'name': 'Sample {class} 2', 'description': 'Second sample {entity}'}},\n\
         ]\n\
         \n\
         \n\
         class {class}List(Resource):\n\
         \x20   def get(self):\n\
         \x20       return {{'{plural}': {entity}_data}}, 200\n\
         \n\
         \x20   def post(self):\n\
         \x20       # parse request data and persist in production\n\
         \x20       return {{'message': '{class} created'}}, 201\n\
         \n\
         \n\
         class {class}Detail(Resource):\n\
         \x20   def get(self, {entity}_id):\n\
         \x20       item = next((item for item in {entity}_data if item['id'] == {entity}_id), None)\n\
         \x20       if item:\n\
         \x20           return item, 200\n\
         \x20       return {{'message': '{class} not found'}}, 404\n\
         \n\
         \x20   def put(self, {entity}_id):\n\
         \x20       return {{'message': '{class} updated'}}, 200\n\
         \n\
         \x20   def delete(self, {entity}_id):\n\
         \x20       return {{'message': '{class} deleted'}}, 204\n"
    )
}

const ENV_FILE: &str = r#"SECRET_KEY=your-secret-key-here-change-in-production
DEBUG=True
HOST=0.0.0.0
PORT=5000
"#;

const GITIGNORE: &str = r#"# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
venv/
env/
ENV/
.venv

# Environment
.env
.env.local

# IDE
.vscode/
.idea/
*.swp
*.swo
"#;
