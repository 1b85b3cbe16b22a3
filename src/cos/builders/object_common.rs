// objstore: request construction for S3 compatible object storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::cos::error::ValidationErr;
use crate::cos::multimap_ext::QueryParams;
use crate::cos::utils::{
    canonical_object_path, check_bucket_name, check_object_name, check_version_id,
};
use std::marker::PhantomData;

/// Shared state of operations addressing one (optionally versioned) object without a payload
#[derive(Clone, Debug)]
pub struct ObjectCommon<T> {
    pub(crate) bucket: String,
    pub(crate) object: String,
    pub(crate) version_id: Option<String>,

    _operation: PhantomData<T>,
}

impl<T> ObjectCommon<T> {
    pub fn new(
        bucket: impl Into<String>,
        object: impl Into<String>,
        version_id: Option<String>,
    ) -> Result<Self, ValidationErr> {
        let bucket = bucket.into();
        let object = object.into();
        check_bucket_name(&bucket)?;
        check_object_name(&object)?;
        check_version_id(version_id.as_deref())?;

        Ok(Self {
            bucket,
            object,
            version_id,
            _operation: PhantomData,
        })
    }

    pub(crate) fn version_query(&self) -> QueryParams {
        let mut query_params = QueryParams::new();
        query_params.add_version(self.version_id.clone());
        query_params
    }

    pub(crate) fn object_path(&self) -> String {
        canonical_object_path(&self.object)
    }
}
