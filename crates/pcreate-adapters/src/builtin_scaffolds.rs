//! Scaffolds that ship with pcreate.
//!
//! [`all_scaffolds`] builds the `starter` and `alchemy` scaffolds over the
//! given filesystem. Both produce an installable web application package:
//! `setup.py`, a `development.ini`, a README and a package named after the
//! project (`+package+`). `alchemy` adds a persistence module.

use std::sync::Arc;

use pcreate_core::application::ports::Filesystem;

use crate::scaffold::TemplateScaffold;

/// Build every built-in scaffold, in name order.
pub fn all_scaffolds(filesystem: Arc<dyn Filesystem>) -> Vec<TemplateScaffold> {
    vec![alchemy(Arc::clone(&filesystem)), starter(filesystem)]
}

/// Minimal application: one view, one template.
pub fn starter(filesystem: Arc<dyn Filesystem>) -> TemplateScaffold {
    common(TemplateScaffold::new(
        "starter",
        "Basic web application project",
        filesystem,
    ))
    .with_entry("setup.py_tmpl", setup_py(&[]))
    .with_entry("+package+/__init__.py_tmpl", STARTER_INIT)
    .with_entry("+package+/views.py_tmpl", STARTER_VIEWS)
}

/// Application with a SQLAlchemy persistence module.
pub fn alchemy(filesystem: Arc<dyn Filesystem>) -> TemplateScaffold {
    common(TemplateScaffold::new(
        "alchemy",
        "Web application project using SQLAlchemy",
        filesystem,
    ))
    .with_entry(
        "setup.py_tmpl",
        setup_py(&["SQLAlchemy", "transaction", "zope.sqlalchemy"]),
    )
    .with_entry("+package+/__init__.py_tmpl", ALCHEMY_INIT)
    .with_entry("+package+/models.py_tmpl", ALCHEMY_MODELS)
    .with_entry("+package+/views.py_tmpl", ALCHEMY_VIEWS)
}

fn common(scaffold: TemplateScaffold) -> TemplateScaffold {
    scaffold
        .with_entry("README.txt_tmpl", README)
        .with_entry("CHANGES.txt_tmpl", CHANGES)
        .with_entry("development.ini_tmpl", DEVELOPMENT_INI)
        .with_entry("+package+/templates/mytemplate.pt_tmpl", MYTEMPLATE)
        .with_entry("+package+/tests.py_tmpl", TESTS)
}

fn setup_py(extra_requires: &[&str]) -> String {
    let mut requires = vec!["pyramid", "pyramid_chameleon", "waitress"];
    requires.extend_from_slice(extra_requires);
    let requires: String = requires
        .iter()
        .map(|r| format!("    '{}',\n", r))
        .collect();

    format!(
        "import os\n\
         \n\
         from setuptools import setup, find_packages\n\
         \n\
         here = os.path.abspath(os.path.dirname(__file__))\n\
         with open(os.path.join(here, 'README.txt')) as f:\n\
         \x20   README = f.read()\n\
         \n\
         requires = [\n{requires}]\n\
         \n\
         setup(\n\
         \x20   name='{{{{project}}}}',\n\
         \x20   version='0.0',\n\
         \x20   description='{{{{project}}}}',\n\
         \x20   long_description=README,\n\
         \x20   packages=find_packages(),\n\
         \x20   include_package_data=True,\n\
         \x20   zip_safe=False,\n\
         \x20   install_requires=requires,\n\
         \x20   entry_points=\"\"\"\\\n\
         \x20   [paste.app_factory]\n\
         \x20   main = {{{{package}}}}:main\n\
         \x20   \"\"\",\n\
         )\n"
    )
}

const README: &str = "\
{{project}} README
==================

Getting Started
---------------

- cd <directory containing this file>
- pip install -e .
- pserve development.ini

Framework documentation (pyramid {{pyramid_version}}):
https://docs.pylonsproject.org/projects/pyramid/en/{{pyramid_docs_branch}}/
";

const CHANGES: &str = "\
0.0
---

- Initial version
";

const DEVELOPMENT_INI: &str = "\
[app:main]
use = egg:{{egg}}

pyramid.reload_templates = true
pyramid.debug_notfound = false
pyramid.default_locale_name = en

[server:main]
use = egg:waitress#main
listen = localhost:6543

[loggers]
keys = root, {{package}}

[logger_{{package}}]
level = DEBUG
handlers =
qualname = {{package}}
";

const MYTEMPLATE: &str = "\
<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"utf-8\">
  <title>{{project}}</title>
</head>
<body>
  <h1>{{project}}</h1>
  <p>Welcome to ${project}, an application generated by pcreate.</p>
  <a href=\"https://docs.pylonsproject.org/projects/pyramid/en/{{pyramid_docs_branch}}/\">Docs</a>
</body>
</html>
";

const TESTS: &str = "\
import unittest

from pyramid import testing


class ViewTests(unittest.TestCase):
    def setUp(self):
        self.config = testing.setUp()

    def tearDown(self):
        testing.tearDown()

    def test_my_view(self):
        from .views import my_view
        request = testing.DummyRequest()
        info = my_view(request)
        self.assertEqual(info['project'], '{{project}}')
";

const STARTER_INIT: &str = "\
from pyramid.config import Configurator


def main(global_config, **settings):
    \"\"\" This function returns a WSGI application for {{project}}.
    \"\"\"
    config = Configurator(settings=settings)
    config.include('pyramid_chameleon')
    config.add_route('home', '/')
    config.scan()
    return config.make_wsgi_app()
";

const STARTER_VIEWS: &str = "\
from pyramid.view import view_config


@view_config(route_name='home', renderer='templates/mytemplate.pt')
def my_view(request):
    return {'project': '{{project}}'}
";

const ALCHEMY_INIT: &str = "\
from pyramid.config import Configurator
from sqlalchemy import engine_from_config

from .models import DBSession, Base


def main(global_config, **settings):
    \"\"\" This function returns a WSGI application for {{project}}.
    \"\"\"
    engine = engine_from_config(settings, 'sqlalchemy.')
    DBSession.configure(bind=engine)
    Base.metadata.bind = engine
    config = Configurator(settings=settings)
    config.include('pyramid_chameleon')
    config.add_route('home', '/')
    config.scan()
    return config.make_wsgi_app()
";

const ALCHEMY_MODELS: &str = "\
from sqlalchemy import Column, Integer, Text
from sqlalchemy.ext.declarative import declarative_base
from sqlalchemy.orm import scoped_session, sessionmaker
from zope.sqlalchemy import ZopeTransactionExtension

DBSession = scoped_session(sessionmaker(extension=ZopeTransactionExtension()))
Base = declarative_base()


class MyModel(Base):
    __tablename__ = 'models'
    id = Column(Integer, primary_key=True)
    name = Column(Text, unique=True)
    value = Column(Integer)
";

const ALCHEMY_VIEWS: &str = "\
from pyramid.view import view_config

from .models import DBSession, MyModel


@view_config(route_name='home', renderer='templates/mytemplate.pt')
def my_view(request):
    one = DBSession.query(MyModel).filter(MyModel.name == 'one').first()
    return {'one': one, 'project': '{{project}}'}
";
