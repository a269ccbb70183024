//! FastAPI profile: layered application skeleton plus a self-contained
//! `main.py` carrying one Pydantic-model/CRUD-endpoint unit per entity,
//! seeded with in-memory sample records so the service runs standalone.

use super::{FrameworkProfile, ProfileOutput, assisted_unit, entity_prompt};
use crate::assist::GenerativeAssist;
use crate::inflect::{capitalize, pluralize};
use crate::model::{Database, Feature, FrameworkKind, GeneratedFile, ProjectConfig};
use async_trait::async_trait;

pub struct FastApiProfile;

/// Layered directories receiving an empty `__init__.py`.
const PACKAGE_DIRS: &[&str] = &[
    "app",
    "app/api",
    "app/api/routes",
    "app/core",
    "app/models",
    "app/models/domain",
    "app/models/schemas",
    "app/services",
    "app/repositories",
    "app/db",
    "tests",
    "tests/unit",
    "tests/integration",
];

#[async_trait]
impl FrameworkProfile for FastApiProfile {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::FastApi
    }

    async fn generate(
        &self,
        project: &str,
        config: &ProjectConfig,
        assist: Option<&GenerativeAssist>,
    ) -> ProfileOutput {
        let mut warnings = Vec::new();
        let mut files = Vec::new();

        for dir in PACKAGE_DIRS {
            files.push(GeneratedFile::new(format!("{dir}/__init__.py"), ""));
        }
        files.push(GeneratedFile::new("requirements.txt", requirements(config)));
        files.push(GeneratedFile::new("README.md", readme(project, config)));

        let mut endpoint_blocks = Vec::with_capacity(config.entities.len());
        for entity in &config.entities {
            let prompt = entity_prompt(self.kind(), "FastAPI endpoint section", entity, config);
            let block = assisted_unit(
                assist,
                prompt,
                endpoints_block(entity),
                &format!("fastapi endpoints `{entity}`"),
                &mut warnings,
            )
            .await;
            endpoint_blocks.push(block);
        }
        files.push(GeneratedFile::new(
            "main.py",
            main_module(project, config, &endpoint_blocks),
        ));

        files.push(GeneratedFile::new(".env", ENV_FILE));
        files.push(GeneratedFile::new(".gitignore", GITIGNORE));

        if config.database.is_sql() {
            files.push(GeneratedFile::new("models.py", orm_models(&config.entities)));
            files.push(GeneratedFile::new("database.py", DATABASE_PY));
        }

        ProfileOutput { files, warnings }
    }
}

fn requirements(config: &ProjectConfig) -> String {
    let mut lines = vec![
        format!("fastapi=={}", FrameworkKind::FastApi.default_version()),
        "uvicorn[standard]==0.24.0".to_string(),
        "pydantic==2.5.0".to_string(),
        "python-decouple==3.8".to_string(),
    ];

    match config.database {
        Database::Postgres => {
            lines.push("sqlalchemy==2.0.23".to_string());
            lines.push("psycopg2-binary==2.9.9".to_string());
        }
        Database::MySql => {
            lines.push("sqlalchemy==2.0.23".to_string());
            lines.push("mysqlclient==2.2.0".to_string());
        }
        Database::MongoDb => {
            lines.push("motor==3.3.2".to_string());
            lines.push("pymongo==4.6.0".to_string());
        }
        Database::Sqlite => lines.push("sqlalchemy==2.0.23".to_string()),
    }

    if config.has_feature(Feature::Auth) {
        lines.push("python-jose[cryptography]==3.3.0".to_string());
        lines.push("passlib[bcrypt]==1.7.4".to_string());
    }

    lines.join("\n") + "\n"
}

fn readme(project: &str, config: &ProjectConfig) -> String {
    let mut out = format!("# {project}\n\n{}\n\n", config.description.trim());
    out.push_str(&format!(
        "## Framework\n\n- FastAPI {}\n- Database: {}\n\n",
        FrameworkKind::FastApi.default_version(),
        config.database.label()
    ));

    out.push_str("## Detected Entities\n\n");
    for entity in &config.entities {
        out.push_str(&format!(
            "- **{}**: CRUD endpoints at `/api/{}`\n",
            capitalize(entity),
            pluralize(entity)
        ));
    }

    out.push_str("\n## Endpoints\n\n");
    for entity in &config.entities {
        let plural = pluralize(entity);
        out.push_str(&format!(
            "- `GET /api/{plural}`: list all {plural}\n\
             - `GET /api/{plural}/{{id}}`: get a single {entity}\n\
             - `POST /api/{plural}`: create a new {entity}\n\
             - `PUT /api/{plural}/{{id}}`: update a {entity}\n\
             - `DELETE /api/{plural}/{{id}}`: delete a {entity}\n"
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
         uvicorn main:app --reload\n\
         ```\n\n\
         Visit http://localhost:8000/docs for interactive API documentation.\n",
    );
    out
}

fn main_module(project: &str, config: &ProjectConfig, endpoint_blocks: &[String]) -> String {
    let description = config
        .description
        .replace('\n', " ")
        .replace('"', "\\\"")
        .trim()
        .to_string();

    let mut out = format!(
        "from fastapi import FastAPI, HTTPException\n\
         from fastapi.middleware.cors import CORSMiddleware\n\
         from pydantic import BaseModel\n\
         from typing import List, Optional\n\
         from datetime import datetime\n\
         from decouple import config\n\
         \n\
         app = FastAPI(\n\
         \x20   title=\"{project}\",\n\
         \x20   description=\"{description}\",\n\
         \x20   version=\"1.0.0\"\n\
         )\n\
         \n\
         app.add_middleware(\n\
         \x20   CORSMiddleware,\n\
         \x20   allow_origins=[\"*\"],  # configure for production\n\
         \x20   allow_credentials=True,\n\
         \x20   allow_methods=[\"*\"],\n\
         \x20   allow_headers=[\"*\"],\n\
         )\n"
    );

    for block in endpoint_blocks {
        out.push_str("\n\n");
        out.push_str(block);
    }

    let entities_list = config
        .entities
        .iter()
        .map(|entity| format!("\"{entity}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let endpoints_list = config
        .entities
        .iter()
        .map(|entity| format!("\"/api/{}\"", pluralize(entity)))
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&format!(
        "\n\n@app.get(\"/\")\n\
         def read_root():\n\
         \x20   return {{\n\
         \x20       \"message\": \"Welcome to {project} API\",\n\
         \x20       \"docs\": \"/docs\",\n\
         \x20       \"entities\": [{entities_list}],\n\
         \x20       \"endpoints\": [{endpoints_list}]\n\
         \x20   }}\n\
         \n\
         \n\
         @app.get(\"/health\")\n\
         def health_check():\n\
         \x20   return {{\"status\": \"healthy\", \"timestamp\": datetime.now()}}\n\
         \n\
         \n\
         if __name__ == \"__main__\":\n\
         \x20   import uvicorn\n\
         \x20   uvicorn.run(\n\
         \x20       \"main:app\",\n\
         \x20       host=config(\"HOST\", default=\"0.0.0.0\"),\n\
         \x20       port=config(\"PORT\", default=8000, cast=int),\n\
         \x20       reload=config(\"DEBUG\", default=True, cast=bool)\n\
         \x20   )\n"
    ));
    out
}

/// Pydantic models, seeded in-memory store, and five CRUD endpoints for
/// one entity; the per-entity code unit offered to the assist service.
fn endpoints_block(entity: &str) -> String {
    let class = capitalize(entity);
    let plural = pluralize(entity);
    format!(
        "# {class} Pydantic models\n\
         class {class}Base(BaseModel):\n\
         \x20   name: str\n\
         \x20   description: Optional[str] = None\n\
         \n\
         \n\
         class {class}Create({class}Base):\n\
         \x20   pass\n\
         \n\
         \n\
         class {class}Update({class}Base):\n\
         \x20   pass\n\
         \n\
         \n\
         class {class}({class}Base):\n\
         \x20   id: int\n\
         \x20   created_at: datetime\n\
         \x20   updated_at: datetime\n\
         \n\
         \x20   class Config:\n\
         \x20       from_attributes = True\n\
         \n\
         \n\
         # In-memory store for {plural}; replace with a real database\n\
         {entity}_db = [\n\
         \x20   {{\n\
         \x20       \"id\": 1,\n\
         \x20       \"name\": \"Sample {class} 1\",\n\
         \x20       \"description\": \"First sample {entity}\",\n\
         \x20       \"created_at\": datetime.now(),\n\
         \x20       \"updated_at\": datetime.now()\n\
         \x20   }},\n\
         \x20   {{\n\
         \x20       \"id\": 2,\n\
         \x20       \"name\": \"Sample {class} 2\",\n\
         \x20       \"description\": \"Second sample {entity}\",\n\
         \x20       \"created_at\": datetime.now(),\n\
         \x20       \"updated_at\": datetime.now()\n\
         \x20   }}\n\
         ]\n\
         \n\
         \n\
         @app.get(\"/api/{plural}\", response_model=List[{class}])\n\
         def get_{plural}(skip: int = 0, limit: int = 100):\n\
         \x20   \"\"\"Get all {plural}\"\"\"\n\
         \x20   return {entity}_db[skip : skip + limit]\n\
         \n\
         \n\
         @app.get(\"/api/{plural}/{{item_id}}\", response_model={class})\n\
         def get_{entity}(item_id: int):\n\
         \x20   \"\"\"Get a single {entity} by ID\"\"\"\n\
         \x20   item = next((item for item in {entity}_db if item[\"id\"] == item_id), None)\n\
         \x20   if not item:\n\
         \x20       raise HTTPException(status_code=404, detail=\"{class} not found\")\n\
         \x20   return item\n\
         \n\
         \n\
         @app.post(\"/api/{plural}\", response_model={class}, status_code=201)\n\
         def create_{entity}(item: {class}Create):\n\
         \x20   \"\"\"Create a new {entity}\"\"\"\n\
         \x20   new_id = max([i[\"id\"] for i in {entity}_db]) + 1 if {entity}_db else 1\n\
         \x20   new_item = {{\n\
         \x20       \"id\": new_id,\n\
         \x20       \"name\": item.name,\n\
         \x20       \"description\": item.description,\n\
         \x20       \"created_at\": datetime.now(),\n\
         \x20       \"updated_at\": datetime.now()\n\
         \x20   }}\n\
         \x20   {entity}_db.append(new_item)\n\
         \x20   return new_item\n\
         \n\
         \n\
         @app.put(\"/api/{plural}/{{item_id}}\", response_model={class})\n\
         def update_{entity}(item_id: int, item: {class}Update):\n\
         \x20   \"\"\"Update an existing {entity}\"\"\"\n\
         \x20   db_item = next((item for item in {entity}_db if item[\"id\"] == item_id), None)\n\
         \x20   if not db_item:\n\
         \x20       raise HTTPException(status_code=404, detail=\"{class} not found\")\n\
         \x20   db_item[\"name\"] = item.name\n\
         \x20   db_item[\"description\"] = item.description\n\
         \x20   db_item[\"updated_at\"] = datetime.now()\n\
         \x20   return db_item\n\
         \n\
         \n\
         @app.delete(\"/api/{plural}/{{item_id}}\", status_code=204)\n\
         def delete_{entity}(item_id: int):\n\
         \x20   \"\"\"Delete a {entity}\"\"\"\n\
         \x20   {entity}_db[:] = [item for item in {entity}_db if item[\"id\"] != item_id]\n\
         \x20   return None\n"
    )
}

fn orm_models(entities: &[String]) -> String {
    let mut out = String::from(
        "from sqlalchemy import Column, Integer, String, Text, DateTime\n\
         from sqlalchemy.orm import declarative_base\n\
         from datetime import datetime\n\
         \n\
         Base = declarative_base()\n",
    );
    for entity in entities {
        let class = capitalize(entity);
        let plural = pluralize(entity);
        out.push_str(&format!(
            "\n\nclass {class}(Base):\n\
             \x20   __tablename__ = \"{plural}\"\n\
             \n\
             \x20   id = Column(Integer, primary_key=True, index=True)\n\
             \x20   name = Column(String(200), nullable=False)\n\
             \x20   description = Column(Text, nullable=True)\n\
             \x20   created_at = Column(DateTime, default=datetime.utcnow)\n\
             \x20   updated_at = Column(DateTime, default=datetime.utcnow, onupdate=datetime.utcnow)\n"
        ));
    }
    out
}

const DATABASE_PY: &str = r#"from sqlalchemy import create_engine
from sqlalchemy.orm import sessionmaker
from decouple import config

DATABASE_URL = config("DATABASE_URL", default="sqlite:///./app.db")

engine = create_engine(
    DATABASE_URL,
    connect_args={"check_same_thread": False} if "sqlite" in DATABASE_URL else {},
)
SessionLocal = sessionmaker(autocommit=False, autoflush=False, bind=engine)


def get_db():
    db = SessionLocal()
    try:
        yield db
    finally:
        db.close()
"#;

const ENV_FILE: &str = r#"DEBUG=True
HOST=0.0.0.0
PORT=8000
SECRET_KEY=your-secret-key-here-change-in-production
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

# Database
*.db
*.sqlite3
"#;
