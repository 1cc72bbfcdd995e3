#[cfg(test)]
pub const POST_ENTRY: &str = r#"<entry xmlns="http://www.w3.org/2005/Atom">
  <id>tag:blogger.com,1999:blog-1.post-2</id>
  <published>2011-03-05T10:00:00.000Z</published>
  <updated>2011-03-06T11:00:00.000Z</updated>
  <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#post"/>
  <category scheme="http://www.blogger.com/atom/ns#" term="rust"/>
  <category scheme="http://www.blogger.com/atom/ns#" term="blogging"/>
  <title type="text">My post title</title>
  <content type="html">&lt;p&gt;Hello&lt;/p&gt;</content>
  <link rel="replies" type="text/html" href="https://example.com/2011/03/my-post-title.html#comment-form" title="0 Comments"/>
  <link rel="alternate" type="text/html" href="https://example.com/2011/03/my-post-title.html" title="My post title"/>
  <author><name>thiago</name></author>
</entry>"#;

#[cfg(test)]
pub const POST_HEADER: &str = "---
layout: post
title: \"My post title\"
date: 2011-03-05T10:00:00+00:00
comments: false
categories:
 - rust
 - blogging
---";

#[cfg(test)]
pub const EXPORT_FEED: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:app="http://purl.org/atom/app#" xmlns:thr="http://purl.org/syndication/thread/1.0">
  <id>tag:blogger.com,1999:blog-1.archive</id>
  <title type="text">Thiago's blog</title>
  <entry>
    <id>tag:blogger.com,1999:blog-1.layout</id>
    <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#template"/>
    <title type="text">Template: Minima</title>
    <content type="html">&lt;html/&gt;</content>
  </entry>
  <entry>
    <id>tag:blogger.com,1999:blog-1.settings.BLOG_NAME</id>
    <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#settings"/>
    <content type="text">Thiago's blog</content>
  </entry>
  <entry>
    <id>p1</id>
    <published>2020-01-01T00:00:00Z</published>
    <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#post"/>
    <category scheme="http://www.blogger.com/atom/ns#" term="news"/>
    <title type="text">Hi</title>
    <content type="html">&lt;p&gt;hello&lt;/p&gt;</content>
    <link rel="alternate" type="text/html" href="https://example.com/2020/01/hi-there.html"/>
  </entry>
  <entry>
    <id>p2</id>
    <published>2020-02-10T12:30:00.000-03:00</published>
    <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#post"/>
    <title type="text">Work in progress</title>
    <content type="html">&lt;p&gt;unfinished&lt;/p&gt;</content>
    <app:control><app:draft>yes</app:draft></app:control>
  </entry>
  <entry>
    <id>c1</id>
    <published>2020-01-02T00:00:00Z</published>
    <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#comment"/>
    <title type="text">Great</title>
    <content type="html">First!</content>
    <author><name>Alice</name></author>
    <thr:in-reply-to ref="p1" type="text/html"/>
  </entry>
  <entry>
    <id>c2</id>
    <published>2020-01-03T00:00:00Z</published>
    <category scheme="http://schemas.google.com/g/2005#kind" term="http://schemas.google.com/blogger/2008/kind#comment"/>
    <title type="text">Agreed</title>
    <content type="html">Second</content>
    <author><name>Bob</name></author>
    <thr:in-reply-to ref="p1" type="text/html"/>
  </entry>
</feed>"#;
