// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

// Output header names, cased exactly as they are sent.
pub const HOST: &str = "host";
pub const X_AMZ_CONTENT_SHA_256: &str = "X-Amz-Content-Sha256";
pub const X_AMZ_DATE: &str = "X-Amz-Date";
pub const AUTHORIZATION: &str = "Authorization";

// Signature defaults.
pub const DEFAULT_ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const DEFAULT_SIGNED_HEADERS: &str = "host";
pub const AWS4_REQUEST: &str = "aws4_request";

pub const SIGNED_MESSAGE: &str = "Headers signed successfully!";

// Env values used to fill AwsConfig.
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SERVICE: &str = "AWS_SERVICE";
