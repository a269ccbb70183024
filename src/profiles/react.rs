//! React profile: Vite-based SPA scaffold with a feature directory per
//! entity, each holding a presentation unit and a data-access unit. No
//! server-side counterpart is generated.

use super::{FrameworkProfile, ProfileOutput, assisted_unit, entity_prompt};
use crate::assist::GenerativeAssist;
use crate::inflect::{capitalize, pluralize};
use crate::model::{FrameworkKind, GeneratedFile, ProjectConfig};
use async_trait::async_trait;
use serde_json::json;

pub struct ReactProfile;

#[async_trait]
impl FrameworkProfile for ReactProfile {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::React
    }

    async fn generate(
        &self,
        project: &str,
        config: &ProjectConfig,
        assist: Option<&GenerativeAssist>,
    ) -> ProfileOutput {
        let mut warnings = Vec::new();
        let mut files = vec![
            GeneratedFile::new("package.json", package_json(project)),
            GeneratedFile::new("vite.config.js", VITE_CONFIG),
            GeneratedFile::new("index.html", index_html(project)),
            GeneratedFile::new("src/main.jsx", MAIN_JSX),
            GeneratedFile::new("src/App.jsx", app_component(project, config)),
            GeneratedFile::new("src/index.css", index_css(config)),
            GeneratedFile::new("README.md", readme(project, config)),
            GeneratedFile::new(".gitignore", GITIGNORE),
        ];

        for entity in &config.entities {
            let class = capitalize(entity);
            let prompt = entity_prompt(self.kind(), "React list component", entity, config);
            let component = assisted_unit(
                assist,
                prompt,
                list_component(entity),
                &format!("react component `{entity}`"),
                &mut warnings,
            )
            .await;
            files.push(GeneratedFile::new(
                format!("src/features/{entity}/{class}List.jsx"),
                component,
            ));
            files.push(GeneratedFile::new(
                format!("src/features/{entity}/api.js"),
                data_access(entity),
            ));
        }

        ProfileOutput { files, warnings }
    }
}

fn package_json(project: &str) -> String {
    let manifest = json!({
        "name": project,
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "vite build",
            "preview": "vite preview"
        },
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0"
        },
        "devDependencies": {
            "@vitejs/plugin-react": "^4.2.0",
            "vite": "^5.0.0"
        }
    });
    let mut out = serde_json::to_string_pretty(&manifest).expect("manifest serializes");
    out.push('\n');
    out
}

fn index_html(project: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         \x20 <head>\n\
         \x20   <meta charset=\"UTF-8\" />\n\
         \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n\
         \x20   <title>{project}</title>\n\
         \x20 </head>\n\
         \x20 <body>\n\
         \x20   <div id=\"root\"></div>\n\
         \x20   <script type=\"module\" src=\"/src/main.jsx\"></script>\n\
         \x20 </body>\n\
         </html>\n"
    )
}

fn app_component(project: &str, config: &ProjectConfig) -> String {
    let mut out = String::new();
    for entity in &config.entities {
        let class = capitalize(entity);
        out.push_str(&format!(
            "import {class}List from './features/{entity}/{class}List.jsx'\n"
        ));
    }

    let tagline = if config.description.is_empty() {
        "Generated starter application".to_string()
    } else {
        config.description.replace('\n', " ").trim().to_string()
    };

    out.push_str(&format!(
        "\nexport default function App() {{\n\
         \x20 return (\n\
         \x20   <main>\n\
         \x20     <header>\n\
         \x20       <h1>{project}</h1>\n\
         \x20       <p>{tagline}</p>\n\
         \x20     </header>\n"
    ));
    for entity in &config.entities {
        out.push_str(&format!("      <{}List />\n", capitalize(entity)));
    }
    out.push_str("    </main>\n  )\n}\n");
    out
}

fn index_css(config: &ProjectConfig) -> String {
    format!(
        "/* Styling: {} */\n{BASE_CSS}",
        config.styling.trim()
    )
}

fn readme(project: &str, config: &ProjectConfig) -> String {
    let mut out = format!("# {project}\n\n{}\n\n", config.description.trim());
    out.push_str(&format!(
        "## Framework\n\n- React {} + Vite\n- Styling: {}\n\n",
        FrameworkKind::React.default_version(),
        config.styling
    ));

    out.push_str("## Feature Modules\n\n");
    for entity in &config.entities {
        let class = capitalize(entity);
        out.push_str(&format!(
            "- **{class}**: `src/features/{entity}/` ({class}List.jsx + api.js against `/api/{}`)\n",
            pluralize(entity)
        ));
    }

    out.push_str(
        "\n## Setup\n\n\
         ```bash\n\
         npm install\n\
         npm run dev\n\
         ```\n\n\
         The dev server proxies `/api` to `http://localhost:8000`; point it at\n\
         your backend or rely on the built-in sample data.\n",
    );
    out
}

/// Presentation unit for one entity; the per-entity code unit offered to
/// the assist service. Renders live data when the backend answers and
/// falls back to the seeded samples otherwise.
fn list_component(entity: &str) -> String {
    let class = capitalize(entity);
    let plural = pluralize(entity);
    let plural_class = capitalize(&plural);
    let sample = plural.to_uppercase();
    format!(
        "import {{ useEffect, useState }} from 'react'\n\
         import {{ list{plural_class} }} from './api.js'\n\
         \n\
         const SAMPLE_{sample} = [\n\
         \x20 {{ id: 1, name: 'Sample {class} 1', description: 'First sample {entity}' }},\n\
         \x20 {{ id: 2, name: 'Sample {class} 2', description: 'Second sample {entity}' }},\n\
         ]\n\
         \n\
         export default function {class}List() {{\n\
         \x20 const [{plural}, set{plural_class}] = useState(SAMPLE_{sample})\n\
         \x20 const [error, setError] = useState(null)\n\
         \n\
         \x20 useEffect(() => {{\n\
         \x20   list{plural_class}()\n\
         \x20     .then((data) => set{plural_class}(Array.isArray(data) ? data : data.{plural}))\n\
         \x20     .catch((err) => setError(err.message))\n\
         \x20 }}, [])\n\
         \n\
         \x20 return (\n\
         \x20   <section className=\"entity-panel\">\n\
         \x20     <h2>{plural_class}</h2>\n\
         \x20     {{error && <p className=\"notice\">Showing sample data ({{error}})</p>}}\n\
         \x20     <ul>\n\
         \x20       {{{plural}.map(({entity}) => (\n\
         \x20         <li key={{{entity}.id}}>\n\
         \x20           <strong>{{{entity}.name}}</strong>\n\
         \x20           {{{entity}.description && <span>: {{{entity}.description}}</span>}}\n\
         \x20         </li>\n\
         \x20       ))}}\n\
         \x20     </ul>\n\
         \x20   </section>\n\
         \x20 )\n\
         }}\n"
    )
}

/// Data-access unit for one entity: thin fetch wrappers over the CRUD
/// endpoints the REST profiles expose for the same entity.
fn data_access(entity: &str) -> String {
    let class = capitalize(entity);
    let plural = pluralize(entity);
    let plural_class = capitalize(&plural);
    format!(
        "const BASE_URL = '/api/{plural}'\n\
         \n\
         export async function list{plural_class}() {{\n\
         \x20 const response = await fetch(BASE_URL)\n\
         \x20 if (!response.ok) {{\n\
         \x20   throw new Error(`failed to list {plural}: ${{response.status}}`)\n\
         \x20 }}\n\
         \x20 return response.json()\n\
         }}\n\
         \n\
         export async function get{class}(id) {{\n\
         \x20 const response = await fetch(`${{BASE_URL}}/${{id}}`)\n\
         \x20 if (!response.ok) {{\n\
         \x20   throw new Error(`failed to get {entity} ${{id}}: ${{response.status}}`)\n\
         \x20 }}\n\
         \x20 return response.json()\n\
         }}\n\
         \n\
         export async function create{class}(payload) {{\n\
         \x20 const response = await fetch(BASE_URL, {{\n\
         \x20   method: 'POST',\n\
         \x20   headers: {{ 'Content-Type': 'application/json' }},\n\
         \x20   body: JSON.stringify(payload),\n\
         \x20 }})\n\
         \x20 if (!response.ok) {{\n\
         \x20   throw new Error(`failed to create {entity}: ${{response.status}}`)\n\
         \x20 }}\n\
         \x20 return response.json()\n\
         }}\n\
         \n\
         export async function update{class}(id, payload) {{\n\
         \x20 const response = await fetch(`${{BASE_URL}}/${{id}}`, {{\n\
         \x20   method: 'PUT',\n\
         \x20   headers: {{ 'Content-Type': 'application/json' }},\n\
         \x20   body: JSON.stringify(payload),\n\
         \x20 }})\n\
         \x20 if (!response.ok) {{\n\
         \x20   throw new Error(`failed to update {entity} ${{id}}: ${{response.status}}`)\n\
         \x20 }}\n\
         \x20 return response.json()\n\
         }}\n\
         \n\
         export async function delete{class}(id) {{\n\
         \x20 const response = await fetch(`${{BASE_URL}}/${{id}}`, {{ method: 'DELETE' }})\n\
         \x20 if (!response.ok) {{\n\
         \x20   throw new Error(`failed to delete {entity} ${{id}}: ${{response.status}}`)\n\
         \x20 }}\n\
         }}\n"
    )
}

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
  server: {
    port: 3000,
    proxy: {
      '/api': 'http://localhost:8000',
    },
  },
})
"#;

const GITIGNORE: &str = r#"# Logs
logs
*.log
npm-debug.log*

# Dependencies
node_modules
.pnp
.pnp.js

# Build output
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?

# Environment
.env
.env.local
"#;

const MAIN_JSX: &str = r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.jsx'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#;

const BASE_CSS: &str = r#"
:root {
  font-family: system-ui, sans-serif;
  color: #1d2129;
  background-color: #f7f7f8;
}

main {
  max-width: 56rem;
  margin: 0 auto;
  padding: 2rem 1rem;
}

header p {
  color: #5c6470;
}

.entity-panel {
  background: #ffffff;
  border: 1px solid #e3e5e8;
  border-radius: 8px;
  padding: 1rem 1.5rem;
  margin-bottom: 1.5rem;
}

.entity-panel .notice {
  color: #8a6d1a;
  font-size: 0.9rem;
}
"#;
