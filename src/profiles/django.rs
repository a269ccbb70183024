//! Django profile: full-stack REST scaffold with a `config` project
//! package and an `api` app, one model/serializer/viewset/admin unit per
//! detected entity.

use super::{FrameworkProfile, ProfileOutput, assisted_unit, entity_prompt};
use crate::assist::GenerativeAssist;
use crate::inflect::{capitalize, pluralize};
use crate::model::{Database, Feature, FrameworkKind, GeneratedFile, ProjectConfig};
use async_trait::async_trait;

pub struct DjangoProfile;

#[async_trait]
impl FrameworkProfile for DjangoProfile {
    fn kind(&self) -> FrameworkKind {
        FrameworkKind::Django
    }

    async fn generate(
        &self,
        project: &str,
        config: &ProjectConfig,
        assist: Option<&GenerativeAssist>,
    ) -> ProfileOutput {
        let mut warnings = Vec::new();
        let mut files = vec![
            GeneratedFile::new("requirements.txt", requirements(config)),
            GeneratedFile::new("README.md", readme(project, config)),
            GeneratedFile::new("manage.py", MANAGE_PY),
            GeneratedFile::new("config/__init__.py", ""),
            GeneratedFile::new("config/settings.py", settings(config)),
            GeneratedFile::new("config/urls.py", PROJECT_URLS),
            GeneratedFile::new("config/wsgi.py", WSGI_PY),
            GeneratedFile::new("api/__init__.py", ""),
            GeneratedFile::new("api/apps.py", APPS_PY),
        ];

        let mut model_blocks = Vec::with_capacity(config.entities.len());
        for entity in &config.entities {
            let prompt = entity_prompt(self.kind(), "Django model", entity, config);
            let block = assisted_unit(
                assist,
                prompt,
                model_block(entity),
                &format!("django model `{entity}`"),
                &mut warnings,
            )
            .await;
            model_blocks.push(block);
        }

        files.push(GeneratedFile::new("api/models.py", models_module(&model_blocks)));
        files.push(GeneratedFile::new(
            "api/serializers.py",
            serializers_module(&config.entities),
        ));
        files.push(GeneratedFile::new("api/views.py", views_module(&config.entities)));
        files.push(GeneratedFile::new("api/urls.py", urls_module(&config.entities)));
        files.push(GeneratedFile::new("api/admin.py", admin_module(&config.entities)));
        files.push(GeneratedFile::new("api/tests.py", tests_module(&config.entities)));
        files.push(GeneratedFile::new(".gitignore", GITIGNORE));

        if config.has_feature(Feature::Docker) {
            files.push(GeneratedFile::new("Dockerfile", DOCKERFILE));
            files.push(GeneratedFile::new("docker-compose.yml", DOCKER_COMPOSE));
        }

        ProfileOutput { files, warnings }
    }
}

fn requirements(config: &ProjectConfig) -> String {
    let mut lines = vec![
        format!("Django=={}", FrameworkKind::Django.default_version()),
        "djangorestframework==3.14.0".to_string(),
        "python-decouple==3.8".to_string(),
    ];

    match config.database {
        Database::MongoDb => {
            lines.push("djongo==1.3.6".to_string());
            lines.push("pymongo==3.12".to_string());
        }
        Database::Postgres => lines.push("psycopg2-binary==2.9.9".to_string()),
        Database::MySql => lines.push("mysqlclient==2.2.0".to_string()),
        Database::Sqlite => {}
    }

    if config.has_feature(Feature::Auth) {
        lines.push("django-allauth==0.57.0".to_string());
        lines.push("dj-rest-auth==5.0.0".to_string());
    }
    if config.has_feature(Feature::GraphQl) {
        lines.push("graphene-django==3.1.5".to_string());
    }
    if config.has_feature(Feature::Celery) {
        lines.push("celery==5.3.4".to_string());
        lines.push("redis==5.0.1".to_string());
    }
    if config.has_feature(Feature::Docker) {
        lines.push("gunicorn==21.2.0".to_string());
    }

    lines.join("\n") + "\n"
}

fn readme(project: &str, config: &ProjectConfig) -> String {
    let mut out = format!("# {project}\n\n{}\n\n", config.description.trim());
    out.push_str(&format!(
        "## Framework\n\n- Django {}\n- Database: {}\n\n",
        FrameworkKind::Django.default_version(),
        config.database.label()
    ));

    out.push_str("## Detected Entities\n\n");
    for entity in &config.entities {
        out.push_str(&format!(
            "- **{}**: Django model with REST API at `/api/{}/`\n",
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
         python manage.py migrate\n\
         python manage.py createsuperuser\n\
         python manage.py runserver\n\
         ```\n\n\
         ## Testing\n\n\
         ```bash\n\
         python manage.py test\n\
         ```\n",
    );
    out
}

fn settings(config: &ProjectConfig) -> String {
    let db_block = match config.database {
        Database::Sqlite => DB_SQLITE,
        Database::Postgres => DB_POSTGRES,
        Database::MySql => DB_MYSQL,
        Database::MongoDb => DB_MONGO,
    };
    format!("{SETTINGS_HEAD}\n{db_block}\n{SETTINGS_TAIL}")
}

/// One `models.Model` subclass; the per-entity code unit offered to the
/// assist service.
fn model_block(entity: &str) -> String {
    let class = capitalize(entity);
    let plural = pluralize(entity);
    format!(
        "class {class}(models.Model):\n\
         \x20   name = models.CharField(max_length=200)\n\
         \x20   description = models.TextField(blank=True)\n\
         \x20   created_at = models.DateTimeField(auto_now_add=True)\n\
         \x20   updated_at = models.DateTimeField(auto_now=True)\n\
         \n\
         \x20   def __str__(self):\n\
         \x20       return self.name\n\
         \n\
         \x20   class Meta:\n\
         \x20       ordering = ['-created_at']\n\
         \x20       verbose_name = '{entity}'\n\
         \x20       verbose_name_plural = '{plural}'\n"
    )
}

fn models_module(blocks: &[String]) -> String {
    format!("from django.db import models\n\n\n{}", blocks.join("\n\n"))
}

fn class_imports(entities: &[String]) -> String {
    entities
        .iter()
        .map(|entity| capitalize(entity))
        .collect::<Vec<_>>()
        .join(", ")
}

fn serializers_module(entities: &[String]) -> String {
    let mut out = format!(
        "from rest_framework import serializers\nfrom .models import {}\n",
        class_imports(entities)
    );
    for entity in entities {
        let class = capitalize(entity);
        out.push_str(&format!(
            "\n\nclass {class}Serializer(serializers.ModelSerializer):\n\
             \x20   class Meta:\n\
             \x20       model = {class}\n\
             \x20       fields = '__all__'\n"
        ));
    }
    out
}

fn views_module(entities: &[String]) -> String {
    let serializer_imports = entities
        .iter()
        .map(|entity| format!("{}Serializer", capitalize(entity)))
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = format!(
        "from rest_framework import viewsets\n\
         from .models import {}\n\
         from .serializers import {serializer_imports}\n",
        class_imports(entities)
    );
    for entity in entities {
        let class = capitalize(entity);
        out.push_str(&format!(
            "\n\nclass {class}ViewSet(viewsets.ModelViewSet):\n\
             \x20   queryset = {class}.objects.all()\n\
             \x20   serializer_class = {class}Serializer\n"
        ));
    }
    out
}

fn urls_module(entities: &[String]) -> String {
    let viewset_imports = entities
        .iter()
        .map(|entity| format!("{}ViewSet", capitalize(entity)))
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = format!(
        "from django.urls import path, include\n\
         from rest_framework.routers import DefaultRouter\n\
         from .views import {viewset_imports}\n\
         \n\
         router = DefaultRouter()\n"
    );
    for entity in entities {
        out.push_str(&format!(
            "router.register(r'{}', {}ViewSet)\n",
            pluralize(entity),
            capitalize(entity)
        ));
    }
    out.push_str("\nurlpatterns = [\n    path('', include(router.urls)),\n]\n");
    out
}

fn admin_module(entities: &[String]) -> String {
    let mut out = format!(
        "from django.contrib import admin\nfrom .models import {}\n",
        class_imports(entities)
    );
    for entity in entities {
        let class = capitalize(entity);
        out.push_str(&format!(
            "\n\n@admin.register({class})\n\
             class {class}Admin(admin.ModelAdmin):\n\
             \x20   list_display = ['name', 'created_at', 'updated_at']\n\
             \x20   search_fields = ['name', 'description']\n"
        ));
    }
    out
}

fn tests_module(entities: &[String]) -> String {
    let first = &entities[0];
    let class = capitalize(first);
    format!(
        "from django.test import TestCase\n\
         from .models import {}\n\
         \n\
         \n\
         class {class}TestCase(TestCase):\n\
         \x20   def setUp(self):\n\
         \x20       {class}.objects.create(name=\"Test {class}\", description=\"Test Description\")\n\
         \n\
         \x20   def test_{first}_creation(self):\n\
         \x20       item = {class}.objects.get(name=\"Test {class}\")\n\
         \x20       self.assertEqual(item.description, \"Test Description\")\n",
        class_imports(entities)
    )
}

const MANAGE_PY: &str = r#"#!/usr/bin/env python
import os
import sys

if __name__ == '__main__':
    os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'config.settings')
    try:
        from django.core.management import execute_from_command_line
    except ImportError as exc:
        raise ImportError(
            "Couldn't import Django. Are you sure it's installed?"
        ) from exc
    execute_from_command_line(sys.argv)
"#;

const SETTINGS_HEAD: &str = r#"from pathlib import Path
from decouple import config

BASE_DIR = Path(__file__).resolve().parent.parent

SECRET_KEY = config('SECRET_KEY', default='django-insecure-change-this-in-production')

DEBUG = config('DEBUG', default=True, cast=bool)

ALLOWED_HOSTS = config('ALLOWED_HOSTS', default='*').split(',')

INSTALLED_APPS = [
    'django.contrib.admin',
    'django.contrib.auth',
    'django.contrib.contenttypes',
    'django.contrib.sessions',
    'django.contrib.messages',
    'django.contrib.staticfiles',
    'rest_framework',
    'api',
]

MIDDLEWARE = [
    'django.middleware.security.SecurityMiddleware',
    'django.contrib.sessions.middleware.SessionMiddleware',
    'django.middleware.common.CommonMiddleware',
    'django.middleware.csrf.CsrfViewMiddleware',
    'django.contrib.auth.middleware.AuthenticationMiddleware',
    'django.contrib.messages.middleware.MessageMiddleware',
    'django.middleware.clickjacking.XFrameOptionsMiddleware',
]

ROOT_URLCONF = 'config.urls'

TEMPLATES = [
    {
        'BACKEND': 'django.template.backends.django.DjangoTemplates',
        'DIRS': [],
        'APP_DIRS': True,
        'OPTIONS': {
            'context_processors': [
                'django.template.context_processors.debug',
                'django.template.context_processors.request',
                'django.contrib.auth.context_processors.auth',
                'django.contrib.messages.context_processors.messages',
            ],
        },
    },
]

WSGI_APPLICATION = 'config.wsgi.application'
"#;

const DB_SQLITE: &str = r#"DATABASES = {
    'default': {
        'ENGINE': 'django.db.backends.sqlite3',
        'NAME': BASE_DIR / 'db.sqlite3',
    }
}
"#;

const DB_POSTGRES: &str = r#"DATABASES = {
    'default': {
        'ENGINE': 'django.db.backends.postgresql',
        'NAME': config('DB_NAME', default='mydb'),
        'USER': config('DB_USER', default='postgres'),
        'PASSWORD': config('DB_PASSWORD', default='password'),
        'HOST': config('DB_HOST', default='localhost'),
        'PORT': config('DB_PORT', default='5432'),
    }
}
"#;

const DB_MYSQL: &str = r#"DATABASES = {
    'default': {
        'ENGINE': 'django.db.backends.mysql',
        'NAME': config('DB_NAME', default='mydb'),
        'USER': config('DB_USER', default='root'),
        'PASSWORD': config('DB_PASSWORD', default='password'),
        'HOST': config('DB_HOST', default='localhost'),
        'PORT': config('DB_PORT', default='3306'),
    }
}
"#;

const DB_MONGO: &str = r#"DATABASES = {
    'default': {
        'ENGINE': 'djongo',
        'NAME': config('DB_NAME', default='mydb'),
    }
}
"#;

const SETTINGS_TAIL: &str = r#"AUTH_PASSWORD_VALIDATORS = [
    {'NAME': 'django.contrib.auth.password_validation.UserAttributeSimilarityValidator'},
    {'NAME': 'django.contrib.auth.password_validation.MinimumLengthValidator'},
]

LANGUAGE_CODE = 'en-us'
TIME_ZONE = 'UTC'
USE_I18N = True
USE_TZ = True

STATIC_URL = 'static/'
DEFAULT_AUTO_FIELD = 'django.db.models.BigAutoField'

REST_FRAMEWORK = {
    'DEFAULT_PERMISSION_CLASSES': [
        'rest_framework.permissions.AllowAny',
    ]
}
"#;

const PROJECT_URLS: &str = r#"from django.contrib import admin
from django.urls import path, include

urlpatterns = [
    path('admin/', admin.site.urls),
    path('api/', include('api.urls')),
]
"#;

const WSGI_PY: &str = r#"import os
from django.core.wsgi import get_wsgi_application

os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'config.settings')
application = get_wsgi_application()
"#;

const APPS_PY: &str = r#"from django.apps import AppConfig


class ApiConfig(AppConfig):
    default_auto_field = 'django.db.models.BigAutoField'
    name = 'api'
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

# Django
*.log
db.sqlite3
media/
staticfiles/

# IDE
.vscode/
.idea/
*.swp

# Environment
.env
.env.local
"#;

const DOCKERFILE: &str = r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000

CMD ["gunicorn", "--bind", "0.0.0.0:8000", "config.wsgi:application"]
"#;

const DOCKER_COMPOSE: &str = r#"version: '3.8'

services:
  web:
    build: .
    command: python manage.py runserver 0.0.0.0:8000
    volumes:
      - .:/app
    ports:
      - "8000:8000"
    environment:
      - DEBUG=1
"#;
