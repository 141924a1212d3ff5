use std::sync::Arc;

use pf_dao::Db;

use crate::session::SessionStore;

pub struct ApiWebCtx {
    dao: ApiWebDaoCtx,
    session: SessionStore,
    site: ApiWebSiteCtx,
}

impl ApiWebCtx {
    pub fn new(dao: ApiWebDaoCtx, session: SessionStore, site: ApiWebSiteCtx) -> Self {
        Self { dao, session, site }
    }

    pub fn dao(&self) -> &ApiWebDaoCtx {
        &self.dao
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn site(&self) -> &ApiWebSiteCtx {
        &self.site
    }
}

pub struct ApiWebDaoCtx {
    db: Arc<Db>,
}

impl ApiWebDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}

pub struct ApiWebSiteCtx {
    static_dir: String,
    resume_path: String,
    resume_file_name: String,
}

impl ApiWebSiteCtx {
    pub fn new(static_dir: &str, resume_path: &str, resume_file_name: &str) -> Self {
        Self {
            static_dir: static_dir.to_owned(),
            resume_path: resume_path.to_owned(),
            resume_file_name: resume_file_name.to_owned(),
        }
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    pub fn resume_path(&self) -> &str {
        &self.resume_path
    }

    pub fn resume_file_name(&self) -> &str {
        &self.resume_file_name
    }
}
